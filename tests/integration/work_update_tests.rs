//! Single work operation tests

#[cfg(test)]
mod tests {
    use crate::common::{CallerFactory, ORCID, TestDatabase, TestRegistry, WorkFactory};
    use orcid_registry::core::models::{Visibility, WorkType};

    #[tokio::test]
    async fn test_create_rejects_put_code() {
        let test = TestRegistry::with_profile(ORCID).await;
        let mut candidate = WorkFactory::numbered(1);
        candidate.put_code = Some(12);

        let error = test
            .registry
            .works()
            .create_work(ORCID, &CallerFactory::client(), candidate)
            .await
            .unwrap_err();
        assert_eq!(error.orcid_code(), Some(9034));
    }

    #[tokio::test]
    async fn test_create_then_duplicate() {
        let test = TestRegistry::with_profile(ORCID).await;
        let works = test.registry.works();
        let caller = CallerFactory::client();

        let work = works
            .create_work(ORCID, &caller, WorkFactory::numbered(1))
            .await
            .unwrap();
        assert_eq!(work.display_index, 1);
        assert_eq!(work.work_type, WorkType::JournalArticle);

        let error = works
            .create_work(ORCID, &caller, WorkFactory::numbered(1))
            .await
            .unwrap_err();
        assert_eq!(error.orcid_code(), Some(9021));
    }

    #[tokio::test]
    async fn test_visibility_only_change_is_rejected() {
        let test = TestRegistry::with_profile(ORCID).await;
        let works = test.registry.works();
        let caller = CallerFactory::client();

        let mut candidate = WorkFactory::numbered(1);
        candidate.visibility = Some(Visibility::Limited);
        let created = works.create_work(ORCID, &caller, candidate.clone()).await.unwrap();
        assert_eq!(created.visibility, Visibility::Limited);

        let mut edited = WorkFactory::retitled(&candidate, "Retitled alongside visibility");
        edited.visibility = Some(Visibility::Public);
        let error = works
            .update_work(ORCID, &caller, created.put_code, edited)
            .await
            .unwrap_err();
        assert_eq!(error.orcid_code(), Some(9035));

        let stored = works.get_work(ORCID, created.put_code).await.unwrap();
        assert_eq!(stored.visibility, Visibility::Limited);
        assert_eq!(stored.title, created.title);
    }

    #[tokio::test]
    async fn test_update_preserves_identity_fields() {
        let test = TestRegistry::with_profile(ORCID).await;
        let works = test.registry.works();
        let caller = CallerFactory::client();

        let candidate = WorkFactory::numbered(1);
        let created = works.create_work(ORCID, &caller, candidate.clone()).await.unwrap();

        let mut edited = WorkFactory::retitled(&candidate, "Revised");
        edited.work_type = Some("book".to_string());
        edited.journal_title = Some("Annalen der Physik".to_string());
        let updated = works
            .update_work(ORCID, &caller, created.put_code, edited)
            .await
            .unwrap();

        assert_eq!(updated.put_code, created.put_code);
        assert_eq!(updated.display_index, created.display_index);
        assert_eq!(updated.visibility, created.visibility);
        assert_eq!(updated.source, created.source);
        assert_eq!(updated.created_date.timestamp(), created.created_date.timestamp());
        assert_eq!(updated.title.title.as_deref(), Some("Revised"));
        assert_eq!(updated.work_type, WorkType::Book);
        assert_eq!(updated.journal_title.as_deref(), Some("Annalen der Physik"));
        assert!(updated.last_modified_date >= created.last_modified_date);
    }

    #[tokio::test]
    async fn test_update_body_put_code_must_match_path() {
        let test = TestRegistry::with_profile(ORCID).await;
        let works = test.registry.works();
        let caller = CallerFactory::client();
        let created = works
            .create_work(ORCID, &caller, WorkFactory::numbered(1))
            .await
            .unwrap();

        let mut candidate = WorkFactory::numbered(1);
        candidate.put_code = Some(created.put_code + 100);
        let error = works
            .update_work(ORCID, &caller, created.put_code, candidate)
            .await
            .unwrap_err();
        assert_eq!(error.orcid_code(), Some(9034));
    }

    #[tokio::test]
    async fn test_update_into_existing_identifier_is_duplicate() {
        let test = TestRegistry::with_profile(ORCID).await;
        let works = test.registry.works();
        let caller = CallerFactory::client();
        works.create_work(ORCID, &caller, WorkFactory::numbered(1)).await.unwrap();
        let second = works
            .create_work(ORCID, &caller, WorkFactory::numbered(2))
            .await
            .unwrap();

        let error = works
            .update_work(ORCID, &caller, second.put_code, WorkFactory::numbered(1))
            .await
            .unwrap_err();
        assert_eq!(error.orcid_code(), Some(9021));
    }

    #[tokio::test]
    async fn test_only_source_may_update_or_delete() {
        let test = TestRegistry::with_profile(ORCID).await;
        let works = test.registry.works();
        let created = works
            .create_work(ORCID, &CallerFactory::client(), WorkFactory::numbered(1))
            .await
            .unwrap();

        let error = works
            .update_work(
                ORCID,
                &CallerFactory::other_client(),
                created.put_code,
                WorkFactory::numbered(1),
            )
            .await
            .unwrap_err();
        assert_eq!(error.orcid_code(), Some(9010));

        let error = works
            .delete_work(ORCID, &CallerFactory::other_client(), created.put_code)
            .await
            .unwrap_err();
        assert_eq!(error.orcid_code(), Some(9010));

        works
            .delete_work(ORCID, &CallerFactory::client(), created.put_code)
            .await
            .unwrap();
        let error = works.get_work(ORCID, created.put_code).await.unwrap_err();
        assert_eq!(error.orcid_code(), Some(9016));
    }

    #[tokio::test]
    async fn test_claimed_profile_imposes_default_visibility() {
        let database = TestDatabase::new().await;
        database
            .add_profile(ORCID, true, Some(Visibility::Limited))
            .await;
        let test = TestRegistry::over(database);

        let mut candidate = WorkFactory::numbered(1);
        candidate.visibility = Some(Visibility::Public);
        let work = test
            .registry
            .works()
            .create_work(ORCID, &CallerFactory::client(), candidate)
            .await
            .unwrap();
        assert_eq!(work.visibility, Visibility::Limited);
    }

    #[tokio::test]
    async fn test_claimed_profile_without_default_is_private() {
        let database = TestDatabase::new().await;
        database.add_profile(ORCID, true, None).await;
        let test = TestRegistry::over(database);

        let mut candidate = WorkFactory::numbered(1);
        candidate.visibility = Some(Visibility::Public);
        let work = test
            .registry
            .works()
            .create_work(ORCID, &CallerFactory::client(), candidate)
            .await
            .unwrap();
        assert_eq!(work.visibility, Visibility::Private);
    }
}
