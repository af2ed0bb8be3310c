//! Address manager tests

#[cfg(test)]
mod tests {
    use crate::common::{CallerFactory, ORCID, TestRegistry};
    use orcid_registry::core::models::{AddressCandidate, Visibility};

    fn address(country: &str, visibility: Option<Visibility>) -> AddressCandidate {
        AddressCandidate {
            visibility,
            ..AddressCandidate::new(country)
        }
    }

    #[tokio::test]
    async fn test_create_stamps_source_and_index() {
        let test = TestRegistry::with_profile(ORCID).await;
        let created = test
            .registry
            .addresses()
            .create_address(ORCID, &CallerFactory::client(), address("US", None))
            .await
            .unwrap();

        assert_eq!(created.country, "US");
        assert_eq!(created.source.source_id(), Some("APP-0000000000000001"));
        assert_eq!(created.visibility, Visibility::Private);
        assert_eq!(created.display_index, 1);
    }

    #[tokio::test]
    async fn test_country_must_be_upper_case_alpha_2() {
        let test = TestRegistry::with_profile(ORCID).await;
        let addresses = test.registry.addresses();

        for country in ["us", "USA", ""] {
            let error = addresses
                .create_address(ORCID, &CallerFactory::client(), address(country, None))
                .await
                .unwrap_err();
            assert_eq!(error.orcid_code(), Some(9037), "country {:?}", country);
        }
    }

    #[tokio::test]
    async fn test_duplicate_country_from_same_source() {
        let test = TestRegistry::with_profile(ORCID).await;
        let addresses = test.registry.addresses();

        addresses
            .create_address(ORCID, &CallerFactory::client(), address("US", None))
            .await
            .unwrap();

        let error = addresses
            .create_address(ORCID, &CallerFactory::client(), address("US", None))
            .await
            .unwrap_err();
        assert_eq!(error.orcid_code(), Some(9021));

        addresses
            .create_address(ORCID, &CallerFactory::other_client(), address("US", None))
            .await
            .expect("other source may add the same country");
    }

    #[tokio::test]
    async fn test_api_update_rules() {
        let test = TestRegistry::with_profile(ORCID).await;
        let addresses = test.registry.addresses();
        let created = addresses
            .create_address(
                ORCID,
                &CallerFactory::client(),
                address("US", Some(Visibility::Public)),
            )
            .await
            .unwrap();

        let error = addresses
            .update_address(
                ORCID,
                &CallerFactory::other_client(),
                created.put_code,
                address("GB", None),
            )
            .await
            .unwrap_err();
        assert_eq!(error.orcid_code(), Some(9010));

        let error = addresses
            .update_address(
                ORCID,
                &CallerFactory::client(),
                created.put_code,
                address("US", Some(Visibility::Private)),
            )
            .await
            .unwrap_err();
        assert_eq!(error.orcid_code(), Some(9035));

        let updated = addresses
            .update_address(ORCID, &CallerFactory::client(), created.put_code, address("GB", None))
            .await
            .unwrap();
        assert_eq!(updated.country, "GB");
        assert_eq!(updated.visibility, Visibility::Public);
        assert_eq!(updated.source, created.source);
    }

    #[tokio::test]
    async fn test_ui_may_change_visibility() {
        let test = TestRegistry::with_profile(ORCID).await;
        let addresses = test.registry.addresses();
        let created = addresses
            .create_address(
                ORCID,
                &CallerFactory::client(),
                address("US", Some(Visibility::Public)),
            )
            .await
            .unwrap();

        let updated = addresses
            .update_address(
                ORCID,
                &CallerFactory::owner_ui(),
                created.put_code,
                address("US", Some(Visibility::Private)),
            )
            .await
            .unwrap();
        assert_eq!(updated.visibility, Visibility::Private);
        assert_eq!(updated.source, created.source);
    }

    #[tokio::test]
    async fn test_delete_checks_source() {
        let test = TestRegistry::with_profile(ORCID).await;
        let addresses = test.registry.addresses();
        let created = addresses
            .create_address(ORCID, &CallerFactory::client(), address("US", None))
            .await
            .unwrap();

        let error = addresses
            .delete_address(ORCID, &CallerFactory::other_client(), created.put_code)
            .await
            .unwrap_err();
        assert_eq!(error.orcid_code(), Some(9010));

        assert!(
            addresses
                .delete_address(ORCID, &CallerFactory::client(), created.put_code)
                .await
                .unwrap()
        );
        assert!(
            !addresses
                .delete_address(ORCID, &CallerFactory::client(), created.put_code)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_ui_sync_replaces_list() {
        let test = TestRegistry::with_profile(ORCID).await;
        let addresses = test.registry.addresses();
        let caller = CallerFactory::owner_ui();

        let kept = addresses
            .create_address(ORCID, &caller, address("US", None))
            .await
            .unwrap();
        let dropped = addresses
            .create_address(ORCID, &caller, address("GB", None))
            .await
            .unwrap();

        let edited = AddressCandidate {
            put_code: Some(kept.put_code),
            country: "CA".to_string(),
            visibility: Some(Visibility::Public),
            display_index: Some(10),
        };
        let synced = addresses
            .update_addresses(ORCID, &caller, vec![edited, address("FR", None)])
            .await
            .unwrap();

        assert_eq!(synced.len(), 2);
        assert!(synced.iter().all(|a| a.put_code != dropped.put_code));

        let first = &synced[0];
        assert_eq!(first.put_code, kept.put_code);
        assert_eq!(first.country, "CA");
        assert_eq!(first.visibility, Visibility::Public);
        assert_eq!(first.display_index, 10);
        assert_eq!(synced[1].country, "FR");
    }

    #[tokio::test]
    async fn test_failed_sync_leaves_list_unchanged() {
        let test = TestRegistry::with_profile(ORCID).await;
        let addresses = test.registry.addresses();
        let caller = CallerFactory::owner_ui();

        let us = addresses
            .create_address(ORCID, &caller, address("US", None))
            .await
            .unwrap();
        addresses
            .create_address(ORCID, &caller, address("GB", None))
            .await
            .unwrap();

        let unknown = AddressCandidate {
            put_code: Some(9999),
            country: "FR".to_string(),
            visibility: None,
            display_index: None,
        };
        let keep_us = AddressCandidate {
            put_code: Some(us.put_code),
            ..address("US", None)
        };
        let error = addresses
            .update_addresses(ORCID, &caller, vec![keep_us.clone(), unknown])
            .await
            .unwrap_err();
        assert_eq!(error.orcid_code(), Some(9016));

        let error = addresses
            .update_addresses(
                ORCID,
                &caller,
                vec![keep_us, address("DE", None), address("DE", None)],
            )
            .await
            .unwrap_err();
        assert_eq!(error.orcid_code(), Some(9021));

        let mut countries: Vec<String> = addresses
            .get_addresses(ORCID)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.country)
            .collect();
        countries.sort();
        assert_eq!(countries, vec!["GB", "US"]);
    }
}
