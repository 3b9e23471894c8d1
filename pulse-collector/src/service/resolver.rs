//! Named cluster resolution

use pulse_core::domain::cluster::Cluster;
use pulse_core::domain::report::NamedClusterLookup;
use std::collections::BTreeSet;

/// Match collected clusters against the configured cluster names
///
/// Every name starts unresolved. A cluster whose display name equals a
/// configured name binds it; when several clusters share that name, the one
/// listed last wins.
pub fn resolve_named_clusters(names: &BTreeSet<String>, clusters: &[Cluster]) -> NamedClusterLookup {
    let mut lookup = NamedClusterLookup::new(names.iter().cloned());

    for cluster in clusters {
        lookup.bind(&cluster.cluster_name, cluster.clone());
    }

    lookup
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn cluster(id: &str, name: &str) -> Cluster {
        Cluster {
            cluster_id: id.to_string(),
            cluster_name: name.to_string(),
            status: None,
            created_on: None,
            normalized_instance_hours: None,
            release_label: None,
            instance_type: "UNKNOWN".to_string(),
            log_uri: None,
            master_public_dns_name: None,
            instance_count: "N/A".to_string(),
            step_concurrency_level: None,
            termination_protected: None,
            security_configuration: "None".to_string(),
            applications: vec![],
            tags: BTreeMap::new(),
        }
    }

    fn names(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_unmatched_names_stay_unresolved() {
        let lookup = resolve_named_clusters(
            &names(&["analytics", "reporting"]),
            &[cluster("j-1", "analytics"), cluster("j-2", "adhoc")],
        );

        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.get("analytics").unwrap().cluster_id, "j-1");
        assert!(lookup.get("reporting").is_none());
        assert!(!lookup.tracks("adhoc"));
    }

    #[test]
    fn test_last_matching_cluster_wins() {
        let lookup = resolve_named_clusters(
            &names(&["analytics"]),
            &[
                cluster("j-1", "analytics"),
                cluster("j-2", "other"),
                cluster("j-3", "analytics"),
            ],
        );

        assert_eq!(lookup.get("analytics").unwrap().cluster_id, "j-3");
    }

    #[test]
    fn test_no_names_configured() {
        let lookup = resolve_named_clusters(&BTreeSet::new(), &[cluster("j-1", "analytics")]);
        assert!(lookup.is_empty());
    }

    #[test]
    fn test_no_clusters() {
        let lookup = resolve_named_clusters(&names(&["analytics"]), &[]);
        assert_eq!(lookup.resolved_count(), 0);
        assert_eq!(lookup.len(), 1);
    }
}
