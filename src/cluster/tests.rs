#[cfg(test)]
mod cluster_tests {
    mod content_id_tests {
        use std::str::FromStr;
        use crate::cluster::structs::content_id::ContentId;
        use crate::pinsvc::errors::PinSvcError;

        #[test]
        fn test_content_id_v0_roundtrip() {
            let raw = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";
            let cid = ContentId::from_str(raw).unwrap();
            assert_eq!(cid.to_string(), raw);
        }

        #[test]
        fn test_content_id_v1_roundtrip() {
            let raw = "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi";
            let cid = ContentId::from_str(raw).unwrap();
            assert_eq!(cid.to_string(), raw);
        }

        #[test]
        fn test_content_id_decode_invalid() {
            match ContentId::decode("not-a-cid") {
                Err(PinSvcError::InvalidCid { cid, .. }) => assert_eq!(cid, "not-a-cid"),
                other => panic!("Expected InvalidCid, got {:?}", other),
            }
        }

        #[test]
        fn test_content_id_serialization() {
            let cid = ContentId::from_str("QmT78zSuBmuS4z925WZfrqQ1qHaJ56DQaTfyMUF7F8ff5o").unwrap();
            let serialized = serde_json::to_string(&cid).unwrap();
            assert_eq!(serialized, "\"QmT78zSuBmuS4z925WZfrqQ1qHaJ56DQaTfyMUF7F8ff5o\"");
            let deserialized: ContentId = serde_json::from_str(&serialized).unwrap();
            assert_eq!(deserialized, cid);
        }

        #[test]
        fn test_content_id_deserialization_rejects_garbage() {
            let result = serde_json::from_str::<ContentId>("\"zzz\"");
            assert!(result.is_err());
        }
    }

    mod tracker_status_tests {
        use crate::cluster::structs::tracker_status::TrackerStatus;

        #[test]
        fn test_tracker_status_default_is_undefined() {
            assert!(TrackerStatus::default().is_undefined());
        }

        #[test]
        fn test_tracker_status_composites() {
            assert!(TrackerStatus::ERROR.contains(TrackerStatus::CLUSTER_ERROR));
            assert!(TrackerStatus::ERROR.contains(TrackerStatus::PIN_ERROR));
            assert!(TrackerStatus::ERROR.contains(TrackerStatus::UNPIN_ERROR));
            assert!(TrackerStatus::QUEUED.contains(TrackerStatus::PIN_QUEUED));
            assert!(TrackerStatus::QUEUED.contains(TrackerStatus::UNPIN_QUEUED));
            assert!(!TrackerStatus::ERROR.intersects(TrackerStatus::PINNED));
        }

        #[test]
        fn test_tracker_status_matches_is_existential() {
            let combined = TrackerStatus::PINNED | TrackerStatus::PIN_QUEUED;
            assert!(combined.matches(TrackerStatus::PIN_QUEUED));
            assert!(combined.matches(TrackerStatus::PINNED | TrackerStatus::PINNING));
            assert!(!combined.matches(TrackerStatus::ERROR));
            assert!(!combined.matches(TrackerStatus::empty()));
        }

        #[test]
        fn test_tracker_status_serializes_as_bits() {
            let status = TrackerStatus::PINNED | TrackerStatus::PINNING;
            let serialized = serde_json::to_string(&status).unwrap();
            assert_eq!(serialized, (TrackerStatus::PINNED.bits() | TrackerStatus::PINNING.bits()).to_string());
            let deserialized: TrackerStatus = serde_json::from_str(&serialized).unwrap();
            assert_eq!(deserialized, status);
        }

        #[test]
        fn test_tracker_status_keeps_unknown_bits() {
            let deserialized: TrackerStatus = serde_json::from_str(&(1u32 << 30).to_string()).unwrap();
            assert_eq!(deserialized.bits(), 1 << 30);
        }
    }

    mod global_pin_info_tests {
        use std::str::FromStr;
        use chrono::{DateTime, TimeZone, Utc};
        use crate::cluster::structs::content_id::ContentId;
        use crate::cluster::structs::global_pin_info::GlobalPinInfo;
        use crate::cluster::structs::pin_info::PinInfo;
        use crate::cluster::structs::tracker_status::TrackerStatus;

        fn peer(name: &str, status: TrackerStatus, ts: DateTime<Utc>, addrs: &[&str]) -> PinInfo {
            PinInfo {
                peer: name.to_string(),
                status,
                ipfs_addresses: addrs.iter().map(|a| a.to_string()).collect(),
                ts,
                error: String::new(),
            }
        }

        fn info() -> GlobalPinInfo {
            GlobalPinInfo::new(ContentId::from_str("QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG").unwrap())
        }

        #[test]
        fn test_combined_status_ors_every_peer() {
            let now = Utc::now();
            let mut gpi = info();
            gpi.peer_map.insert("a".to_string(), peer("a", TrackerStatus::PINNED, now, &[]));
            gpi.peer_map.insert("b".to_string(), peer("b", TrackerStatus::PIN_QUEUED, now, &[]));
            assert_eq!(gpi.combined_status(), TrackerStatus::PINNED | TrackerStatus::PIN_QUEUED);
        }

        #[test]
        fn test_oldest_timestamp_without_peers_is_zero() {
            assert_eq!(info().oldest_timestamp(), DateTime::<Utc>::default());
        }

        #[test]
        fn test_delegates_union() {
            let now = Utc::now();
            let mut gpi = info();
            gpi.peer_map.insert("a".to_string(), peer("a", TrackerStatus::PINNED, now, &["/ip4/10.0.0.1/tcp/4001"]));
            gpi.peer_map.insert("b".to_string(), peer("b", TrackerStatus::PINNED, now, &["/ip4/10.0.0.2/tcp/4001", "/ip6/::1/tcp/4001"]));
            assert_eq!(gpi.delegates(), vec![
                "/ip4/10.0.0.1/tcp/4001".to_string(),
                "/ip4/10.0.0.2/tcp/4001".to_string(),
                "/ip6/::1/tcp/4001".to_string(),
            ]);
        }

        #[test]
        fn test_global_pin_info_deserialization_defaults() {
            let json = r#"{"cid":"QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG"}"#;
            let gpi: GlobalPinInfo = serde_json::from_str(json).unwrap();
            assert!(gpi.peer_map.is_empty());
            assert!(gpi.name.is_empty());
            assert_eq!(gpi.oldest_timestamp(), Utc.timestamp_opt(0, 0).unwrap());
        }
    }

    mod cluster_pin_tests {
        use std::str::FromStr;
        use crate::cluster::enums::pin_mode::PinMode;
        use crate::cluster::structs::cluster_pin::ClusterPin;
        use crate::cluster::structs::content_id::ContentId;
        use crate::cluster::structs::pin_options::PinOptions;

        fn cid() -> ContentId {
            ContentId::from_str("QmPZ9gcCEpqKTo6aq61g2nXGUhM4iCL3ewB6LDXZCtioEB").unwrap()
        }

        #[test]
        fn test_cluster_pin_defaults_to_everywhere() {
            let pin = ClusterPin::new(cid());
            assert!(pin.is_pin_everywhere());
            assert_eq!(pin.options.mode, PinMode::Recursive);
        }

        #[test]
        fn test_cluster_pin_with_replication_is_not_everywhere() {
            let options = PinOptions {
                replication_factor_min: 2,
                replication_factor_max: 3,
                ..PinOptions::default()
            };
            assert!(!ClusterPin::with_options(cid(), options).is_pin_everywhere());
        }

        #[test]
        fn test_cluster_pin_serialization_flattens_options() {
            let mut pin = ClusterPin::new(cid());
            pin.options.name = "doc".to_string();
            pin.options.pin_update = Some(ContentId::from_str("QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG").unwrap());
            let value = serde_json::to_value(&pin).unwrap();
            assert_eq!(value["name"], "doc");
            assert_eq!(value["mode"], "recursive");
            assert_eq!(value["pin_update"], "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG");
            let deserialized: ClusterPin = serde_json::from_value(value).unwrap();
            assert_eq!(deserialized, pin);
        }
    }
}
