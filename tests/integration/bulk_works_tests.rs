//! Bulk work processing tests
//!
//! Runs the bulk processor against in-memory SQLite.

#[cfg(test)]
mod tests {
    use crate::common::{CallerFactory, ORCID, TestDatabase, TestRegistry, WorkFactory};
    use async_trait::async_trait;
    use orcid_registry::core::bulk::{BulkElement, BulkWorkProcessor, MAX_BULK_SIZE};
    use orcid_registry::core::locks::OwnerLocks;
    use orcid_registry::core::models::{NewWork, Profile, TranslatedTitle, Work, WorkTitle};
    use orcid_registry::core::works::WorkManager;
    use orcid_registry::storage::WorkStore;
    use orcid_registry::storage::database::Database;
    use orcid_registry::utils::error::{RegistryError, Result};
    use std::collections::HashSet;
    use std::sync::Arc;

    /// Delegates to the database but fails inserts of one title
    struct PoisonedStore {
        inner: Arc<Database>,
        poison_title: String,
    }

    #[async_trait]
    impl WorkStore for PoisonedStore {
        async fn load_profile(&self, orcid: &str) -> Result<Option<Profile>> {
            self.inner.load_profile(orcid).await
        }

        async fn list_works(&self, orcid: &str) -> Result<Vec<Work>> {
            self.inner.list_works(orcid).await
        }

        async fn load_work(&self, orcid: &str, put_code: i64) -> Result<Option<Work>> {
            self.inner.load_work(orcid, put_code).await
        }

        async fn insert_work(&self, orcid: &str, work: NewWork) -> Result<Work> {
            if work.title.title.as_deref() == Some(self.poison_title.as_str()) {
                return Err(RegistryError::Database(sea_orm::DbErr::Custom(
                    "simulated write failure".to_string(),
                )));
            }
            self.inner.insert_work(orcid, work).await
        }

        async fn update_work(&self, work: &Work) -> Result<Work> {
            self.inner.update_work(work).await
        }

        async fn delete_work(&self, orcid: &str, put_code: i64) -> Result<bool> {
            self.inner.delete_work(orcid, put_code).await
        }
    }

    #[tokio::test]
    async fn test_output_has_one_element_per_input_in_order() {
        let test = TestRegistry::with_profile(ORCID).await;
        let items = WorkFactory::batch(25);

        let bulk = test
            .registry
            .bulk()
            .process_batch(ORCID, &CallerFactory::client(), items)
            .await
            .unwrap();

        assert_eq!(bulk.len(), 25);
        for (i, element) in bulk.bulk.iter().enumerate() {
            let work = element.as_work().expect("every item is valid");
            assert_eq!(work.title.title.as_deref(), Some(format!("Work {}", i).as_str()));
            assert_eq!(work.path, ORCID);
        }
    }

    #[tokio::test]
    async fn test_oversized_batch_persists_nothing() {
        let test = TestRegistry::with_profile(ORCID).await;
        let items = WorkFactory::batch(MAX_BULK_SIZE + 1);

        let error = test
            .registry
            .bulk()
            .process_batch(ORCID, &CallerFactory::client(), items)
            .await
            .unwrap_err();

        assert_eq!(error.orcid_code(), Some(9006));
        let works = test.registry.works().list_works(ORCID).await.unwrap();
        assert!(works.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_items_fail_in_their_own_slots() {
        let test = TestRegistry::with_profile(ORCID).await;
        let mut items = WorkFactory::batch(10);
        items[3].work_type = None;
        items[5].title = Some(WorkTitle::new(""));
        if let Some(title) = items[7].title.as_mut() {
            title.translated_title = Some(TranslatedTitle {
                value: "Titre".to_string(),
                language_code: None,
            });
        }

        let bulk = test
            .registry
            .bulk()
            .process_batch(ORCID, &CallerFactory::client(), items)
            .await
            .unwrap();

        let error = bulk.get(3).and_then(BulkElement::as_error).unwrap();
        assert_eq!(error.code(), 9037);
        assert!(error.developer_message.starts_with("Invalid work type"));

        let error = bulk.get(5).and_then(BulkElement::as_error).unwrap();
        assert_eq!(error.code(), 9022);

        let error = bulk.get(7).and_then(BulkElement::as_error).unwrap();
        assert_eq!(error.code(), 9037);
        assert!(error.developer_message.starts_with("Invalid translated title"));

        for i in [0, 1, 2, 4, 6, 8, 9] {
            let work = bulk.get(i).and_then(BulkElement::as_work).unwrap();
            assert!(work.put_code > 0);
        }
        assert_eq!(test.registry.works().list_works(ORCID).await.unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_same_identifier_ten_times_creates_once() {
        let test = TestRegistry::with_profile(ORCID).await;
        let items = vec![WorkFactory::numbered(1); 10];

        let bulk = test
            .registry
            .bulk()
            .process_batch(ORCID, &CallerFactory::client(), items)
            .await
            .unwrap();

        assert_eq!(bulk.created_count(), 1);
        assert_eq!(bulk.error_count(), 9);
        assert!(bulk.get(0).unwrap().is_work());
        assert!(bulk.errors().all(|error| error.code() == 9021));
    }

    #[tokio::test]
    async fn test_duplicate_of_earlier_batch() {
        let test = TestRegistry::with_profile(ORCID).await;
        let bulk = test.registry.bulk();
        let caller = CallerFactory::client();

        bulk.process_batch(ORCID, &caller, WorkFactory::batch(3))
            .await
            .unwrap();
        let second = bulk
            .process_batch(ORCID, &caller, WorkFactory::batch(4))
            .await
            .unwrap();

        assert_eq!(second.error_count(), 3);
        assert!(second.get(3).unwrap().is_work());
    }

    #[tokio::test]
    async fn test_identifier_match_ignores_type_case_and_whitespace() {
        let test = TestRegistry::with_profile(ORCID).await;
        let first = WorkFactory::numbered(1);
        let mut second = WorkFactory::numbered(1);
        second.external_ids.items[0].id_type = " DOI ".to_string();
        second.external_ids.items[0].value = " 10.1000/1 ".to_string();

        let bulk = test
            .registry
            .bulk()
            .process_batch(ORCID, &CallerFactory::client(), vec![first, second])
            .await
            .unwrap();

        assert_eq!(bulk.get(1).and_then(BulkElement::as_error).unwrap().code(), 9021);
    }

    #[tokio::test]
    async fn test_other_client_may_claim_same_identifier() {
        let test = TestRegistry::with_profile(ORCID).await;
        let bulk = test.registry.bulk();

        bulk.process_batch(ORCID, &CallerFactory::client(), WorkFactory::batch(2))
            .await
            .unwrap();
        let other = bulk
            .process_batch(ORCID, &CallerFactory::other_client(), WorkFactory::batch(2))
            .await
            .unwrap();

        assert_eq!(other.created_count(), 2);
    }

    #[tokio::test]
    async fn test_unknown_profile_rejects_whole_batch() {
        let test = TestRegistry::new().await;

        let error = test
            .registry
            .bulk()
            .process_batch(ORCID, &CallerFactory::client(), WorkFactory::batch(2))
            .await
            .unwrap_err();

        assert_eq!(error.orcid_code(), Some(9016));
    }

    #[tokio::test]
    async fn test_concurrent_batches_get_distinct_display_indexes() {
        let test = TestRegistry::with_profile(ORCID).await;
        let registry = test.registry.clone();
        let other = test.registry.clone();

        let first = tokio::spawn(async move {
            registry
                .bulk()
                .process_batch(ORCID, &CallerFactory::client(), WorkFactory::batch(40))
                .await
        });
        let second = tokio::spawn(async move {
            other
                .bulk()
                .process_batch(ORCID, &CallerFactory::other_client(), WorkFactory::batch(40))
                .await
        });

        let first = first.await.unwrap().unwrap();
        let second = second.await.unwrap().unwrap();
        assert_eq!(first.created_count() + second.created_count(), 80);

        let works = test.registry.works().list_works(ORCID).await.unwrap();
        let indexes: HashSet<i64> = works.iter().map(|work| work.display_index).collect();
        assert_eq!(works.len(), 80);
        assert_eq!(indexes.len(), 80);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_display_index_descending() {
        let test = TestRegistry::with_profile(ORCID).await;
        test.registry
            .bulk()
            .process_batch(ORCID, &CallerFactory::client(), WorkFactory::batch(5))
            .await
            .unwrap();

        let works = test.registry.works().list_works(ORCID).await.unwrap();
        let indexes: Vec<i64> = works.iter().map(|work| work.display_index).collect();
        let mut sorted = indexes.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(indexes, sorted);
        assert_eq!(works[0].title.title.as_deref(), Some("Work 4"));
    }

    #[tokio::test]
    async fn test_write_failure_leaves_siblings_committed() {
        let database = TestDatabase::with_profile(ORCID).await;
        let store = Arc::new(PoisonedStore {
            inner: database.db_arc(),
            poison_title: "Work 2".to_string(),
        });
        let manager = Arc::new(WorkManager::new(store, Arc::new(OwnerLocks::new())));
        let processor = BulkWorkProcessor::new(manager.clone());

        let bulk = processor
            .process_batch(ORCID, &CallerFactory::client(), WorkFactory::batch(5))
            .await
            .unwrap();

        let error = bulk.get(2).and_then(BulkElement::as_error).unwrap();
        assert_eq!(error.code(), 9008);
        assert_eq!(bulk.created_count(), 4);
        assert_eq!(manager.list_works(ORCID).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_configured_limit() {
        let mut config = orcid_registry::Config::default();
        config.registry.bulk.max_batch_size = 3;
        let test = TestRegistry::over_with(TestDatabase::with_profile(ORCID).await, config);

        let error = test
            .registry
            .bulk()
            .process_batch(ORCID, &CallerFactory::client(), WorkFactory::batch(4))
            .await
            .unwrap_err();
        assert_eq!(error.orcid_code(), Some(9006));
    }
}
