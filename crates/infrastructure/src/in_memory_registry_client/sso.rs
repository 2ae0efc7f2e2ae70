use super::*;

impl InMemoryRegistryClient {
    pub(super) async fn sso_config_set_impl(
        &self,
        config: Option<&str>,
    ) -> MutationResult<Option<SsoConfig>> {
        let mut state = self.state.write().await;

        let Some(text) = config else {
            state.sso_config = None;
            return MutationResult::Success(None);
        };

        if text.trim().is_empty() {
            return MutationResult::InvalidInput(vec![InputError::new(
                Some("config"),
                "InvalidSsoConfig",
                "sso config must not be blank",
            )]);
        }

        let uploader = match acting_user(&state) {
            Ok(uploader) => uploader,
            Err(error) => return MutationResult::OperationError(error),
        };

        let stored = SsoConfig {
            text: text.to_owned(),
            timestamp: Utc::now(),
            uploader,
        };
        state.sso_config = Some(stored.clone());
        MutationResult::Success(Some(stored))
    }
}
