use reqwest::Client;
use url::Url;

use crate::client::form::CredentialForm;
use crate::error::VaultError;
use crate::service::restriction::RestrictionId;

/// Path of the generation endpoint, relative to the service base.
pub const GENERATOR_PATH: &str = "support/PasswordGenerator";

/// HTTP client for the password-generation handshake.
///
/// One request per call; no retry and no cancellation of an in-flight
/// request. A failed or non-success response surfaces as an error and leaves
/// any caller-held form state unchanged.
#[derive(Debug, Clone)]
pub struct GeneratorClient {
    http: Client,
    base: Url,
}

impl GeneratorClient {
    pub fn new(http: Client, base: Url) -> Self {
        Self { http, base }
    }

    /// The request URL for a given policy selection.
    pub fn generator_url(&self, rid: Option<&RestrictionId>) -> Result<Url, VaultError> {
        let mut url = self.base.join(GENERATOR_PATH)?;
        if let Some(rid) = rid {
            url.query_pairs_mut().append_pair("rid", rid.as_str());
        }
        Ok(url)
    }

    /// Fetch one generated password for the selected policy.
    pub async fn generate(&self, rid: Option<&RestrictionId>) -> Result<String, VaultError> {
        let url = self.generator_url(rid)?;
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    /// Fetch a password and put it on display in `form`; the modal opens only
    /// on success.
    pub async fn generate_into(
        &self,
        form: &mut CredentialForm,
        rid: Option<&RestrictionId>,
    ) -> Result<(), VaultError> {
        let password = self.generate(rid).await?;
        form.show_generated(password);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> GeneratorClient {
        GeneratorClient::new(Client::new(), Url::parse(base).expect("valid base url"))
    }

    #[test]
    fn generator_url_carries_the_policy_id() {
        let c = client("http://127.0.0.1:8000/app/");
        let rid = RestrictionId::new("2");
        let url = c.generator_url(Some(&rid)).expect("valid url");
        assert_eq!(url.path(), "/app/support/PasswordGenerator");
        assert_eq!(url.query(), Some("rid=2"));
    }

    #[test]
    fn generator_url_without_a_policy_has_no_query() {
        let c = client("http://127.0.0.1:8000/");
        let url = c.generator_url(None).expect("valid url");
        assert_eq!(url.path(), "/support/PasswordGenerator");
        assert_eq!(url.query(), None);
    }
}
