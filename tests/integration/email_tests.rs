//! Email manager tests

#[cfg(test)]
mod tests {
    use crate::common::{CallerFactory, ORCID, OTHER_ORCID, TestDatabase, TestRegistry};
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;
    use orcid_registry::core::emails::{EmailManager, email_hash};
    use orcid_registry::core::models::{EmailCandidate, Visibility};
    use orcid_registry::core::notifications::{Notification, Notifier};
    use orcid_registry::utils::error::{RegistryError, Result};
    use std::sync::Arc;

    mock! {
        pub Mailer {}

        #[async_trait]
        impl Notifier for Mailer {
            async fn send_verification_email(&self, orcid: &str, email: &str) -> Result<()>;
            async fn send_email_address_changed(
                &self,
                orcid: &str,
                new_email: &str,
                old_email: &str,
            ) -> Result<()>;
        }
    }

    async fn registry_with_two_profiles() -> TestRegistry {
        let database = TestDatabase::with_profile(ORCID).await;
        database.add_profile(OTHER_ORCID, false, None).await;
        TestRegistry::over(database)
    }

    fn primary(email: &str) -> EmailCandidate {
        EmailCandidate {
            primary: true,
            ..EmailCandidate::new(email)
        }
    }

    #[tokio::test]
    async fn test_add_email_stores_hash_and_notifies() {
        let test = TestRegistry::with_profile(ORCID).await;
        let email = test
            .registry
            .emails()
            .add_email(ORCID, &CallerFactory::owner_ui(), primary(" Researcher@Example.org "))
            .await
            .unwrap();

        assert_eq!(email.email, "Researcher@Example.org");
        assert_eq!(email.hash, email_hash("researcher@example.org"));
        assert!(email.primary);
        assert!(!email.verified);
        assert_eq!(
            test.notifier.events(),
            vec![Notification::Verification {
                orcid: ORCID.to_string(),
                email: "Researcher@Example.org".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_invalid_address() {
        let test = TestRegistry::with_profile(ORCID).await;
        let error = test
            .registry
            .emails()
            .add_email(ORCID, &CallerFactory::owner_ui(), EmailCandidate::new("nope"))
            .await
            .unwrap_err();
        assert_eq!(error.orcid_code(), Some(9045));
        assert!(test.notifier.events().is_empty());
    }

    #[tokio::test]
    async fn test_address_owned_by_other_record() {
        let test = registry_with_two_profiles().await;
        let emails = test.registry.emails();

        emails
            .add_email(OTHER_ORCID, &CallerFactory::client(), EmailCandidate::new("a@example.org"))
            .await
            .unwrap();
        let error = emails
            .add_email(ORCID, &CallerFactory::client(), EmailCandidate::new("A@example.org"))
            .await
            .unwrap_err();
        assert_eq!(error.orcid_code(), Some(9044));

        let error = emails
            .add_email(OTHER_ORCID, &CallerFactory::client(), EmailCandidate::new("a@example.org"))
            .await
            .unwrap_err();
        assert_eq!(error.orcid_code(), Some(9021));
    }

    #[tokio::test]
    async fn test_new_primary_clears_previous() {
        let test = TestRegistry::with_profile(ORCID).await;
        let emails = test.registry.emails();
        let caller = CallerFactory::owner_ui();

        emails.add_email(ORCID, &caller, primary("first@example.org")).await.unwrap();
        emails.add_email(ORCID, &caller, primary("second@example.org")).await.unwrap();

        let stored = emails.get_emails(ORCID).await.unwrap();
        let primaries: Vec<_> = stored.iter().filter(|e| e.primary).collect();
        assert_eq!(primaries.len(), 1);
        assert_eq!(primaries[0].email, "second@example.org");
    }

    #[tokio::test]
    async fn test_lookup_and_removal() {
        let test = registry_with_two_profiles().await;
        let emails = test.registry.emails();

        emails
            .add_email(ORCID, &CallerFactory::owner_ui(), EmailCandidate::new("a@example.org"))
            .await
            .unwrap();
        emails
            .add_email(OTHER_ORCID, &CallerFactory::client(), EmailCandidate::new("b@example.org"))
            .await
            .unwrap();

        assert!(emails.email_exists("A@EXAMPLE.ORG").await.unwrap());
        let owners = emails
            .find_orcid_ids_by_emails("a@example.org, b@example.org,unknown@example.org,")
            .await
            .unwrap();
        assert_eq!(owners.len(), 2);
        assert_eq!(owners["a@example.org"], ORCID);
        assert_eq!(owners["b@example.org"], OTHER_ORCID);

        assert!(emails.remove_email(ORCID, "a@example.org").await.unwrap());
        assert!(!emails.email_exists("a@example.org").await.unwrap());
        assert!(!emails.remove_email(ORCID, "a@example.org").await.unwrap());
    }

    #[tokio::test]
    async fn test_move_to_other_account() {
        let test = registry_with_two_profiles().await;
        let emails = test.registry.emails();
        emails
            .add_email(ORCID, &CallerFactory::owner_ui(), primary("a@example.org"))
            .await
            .unwrap();
        let before = test.database.db().require_profile(OTHER_ORCID).await.unwrap();

        let moved = emails
            .move_email_to_other_account("a@example.org", ORCID, OTHER_ORCID)
            .await
            .unwrap();

        assert_eq!(moved.path, OTHER_ORCID);
        assert!(!moved.primary);
        assert!(emails.get_emails(ORCID).await.unwrap().is_empty());
        let after = test.database.db().require_profile(OTHER_ORCID).await.unwrap();
        assert!(after.last_modified_date >= before.last_modified_date);
    }

    #[tokio::test]
    async fn test_verification() {
        let test = TestRegistry::with_profile(ORCID).await;
        let emails = test.registry.emails();
        let caller = CallerFactory::owner_ui();
        emails.add_email(ORCID, &caller, primary("a@example.org")).await.unwrap();
        emails
            .add_email(ORCID, &caller, EmailCandidate::new("b@example.org"))
            .await
            .unwrap();

        assert!(!emails.is_primary_email_verified(ORCID).await.unwrap());
        emails.verify_primary_email(ORCID).await.unwrap();
        assert!(emails.is_primary_email_verified(ORCID).await.unwrap());

        let verified = emails.verify_email(ORCID, "b@example.org").await.unwrap();
        assert!(verified.verified);
        assert!(!verified.primary);

        let promoted = emails
            .verify_set_current_and_primary(ORCID, "b@example.org")
            .await
            .unwrap();
        assert!(promoted.primary && promoted.current && promoted.verified);
        let primaries = emails
            .get_emails(ORCID)
            .await
            .unwrap()
            .into_iter()
            .filter(|e| e.primary)
            .count();
        assert_eq!(primaries, 1);
    }

    #[tokio::test]
    async fn test_reactivate_or_create() {
        let test = registry_with_two_profiles().await;
        let emails = test.registry.emails();
        emails
            .add_email(ORCID, &CallerFactory::owner_ui(), primary("a@example.org"))
            .await
            .unwrap();
        emails
            .add_email(OTHER_ORCID, &CallerFactory::client(), EmailCandidate::new("b@example.org"))
            .await
            .unwrap();

        let reactivated = emails
            .reactivate_or_create(ORCID, "a@example.org", Visibility::Limited)
            .await
            .unwrap();
        assert!(!reactivated.primary);
        assert_eq!(reactivated.visibility, Visibility::Limited);

        let error = emails
            .reactivate_or_create(ORCID, "b@example.org", Visibility::Public)
            .await
            .unwrap_err();
        assert_eq!(error.orcid_code(), Some(9044));

        let created = emails
            .reactivate_or_create(ORCID, "c@example.org", Visibility::Public)
            .await
            .unwrap();
        assert_eq!(created.path, ORCID);
        assert_eq!(created.visibility, Visibility::Public);
    }

    #[tokio::test]
    async fn test_edit_primary_email_notifies_change() {
        let database = TestDatabase::with_profile(ORCID).await;
        let mut mailer = MockMailer::new();
        mailer
            .expect_send_verification_email()
            .with(eq(ORCID), eq("old@example.org"))
            .times(1)
            .returning(|_, _| Ok(()));
        mailer
            .expect_send_email_address_changed()
            .with(eq(ORCID), eq("new@example.org"), eq("old@example.org"))
            .times(1)
            .returning(|_, _, _| Ok(()));
        mailer
            .expect_send_verification_email()
            .with(eq(ORCID), eq("new@example.org"))
            .times(1)
            .returning(|_, _| Ok(()));
        let emails = EmailManager::new(database.db_arc(), Arc::new(mailer));

        let original = emails
            .add_email(ORCID, &CallerFactory::owner_ui(), primary("old@example.org"))
            .await
            .unwrap();
        emails.verify_email(ORCID, "old@example.org").await.unwrap();

        let edited = emails
            .edit_email(ORCID, "old@example.org", "new@example.org")
            .await
            .unwrap();

        assert_eq!(edited.hash, email_hash("new@example.org"));
        assert!(edited.primary);
        assert!(!edited.verified);
        assert_eq!(edited.visibility, original.visibility);
        assert!(!emails.email_exists("old@example.org").await.unwrap());
    }

    #[tokio::test]
    async fn test_edit_secondary_email_only_asks_verification() {
        let test = TestRegistry::with_profile(ORCID).await;
        let emails = test.registry.emails();
        emails
            .add_email(ORCID, &CallerFactory::owner_ui(), EmailCandidate::new("old@example.org"))
            .await
            .unwrap();
        test.notifier.clear();

        emails
            .edit_email(ORCID, "old@example.org", "new@example.org")
            .await
            .unwrap();

        assert_eq!(
            test.notifier.events(),
            vec![Notification::Verification {
                orcid: ORCID.to_string(),
                email: "new@example.org".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_notifier_failure_does_not_fail_operation() {
        let database = TestDatabase::with_profile(ORCID).await;
        let mut mailer = MockMailer::new();
        mailer
            .expect_send_verification_email()
            .returning(|_, _| Err(RegistryError::internal("smtp down")));
        let emails = EmailManager::new(database.db_arc(), Arc::new(mailer));

        let email = emails
            .add_email(ORCID, &CallerFactory::owner_ui(), EmailCandidate::new("a@example.org"))
            .await
            .unwrap();
        assert_eq!(email.path, ORCID);
    }
}
