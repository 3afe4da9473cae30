//! Blocking HTTP transport to the pastebin server.
//!
//! The URL fragment never leaves this process: every request URL is built
//! from the form's request path or has its fragment stripped first.

use pasteur_core::{FormMethod, HiddenForm};
use reqwest::blocking::{multipart, Client};
use url::Url;

use crate::errors::CliError;

pub struct HttpTransport {
    base: Url,
    client: Client,
}

impl HttpTransport {
    pub fn new(server: &str) -> anyhow::Result<Self> {
        let base = Url::parse(server).map_err(|e| {
            CliError::invalid_input_with_hint(
                format!("Invalid server URL \"{}\": {}", server, e),
                "Use an absolute URL such as https://paste.example",
            )
        })?;
        let client = Client::builder()
            .user_agent(concat!("pasteur/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CliError::transport(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { base, client })
    }

    /// Resolve a form action against the server, keeping its fragment.
    pub fn resolve(&self, action: &str) -> anyhow::Result<Url> {
        self.base
            .join(action)
            .map_err(|e| anyhow::anyhow!("Invalid form action \"{}\": {}", action, e))
    }

    /// Submit the form and return the URL the server finally answered from,
    /// after redirects. The returned URL carries no fragment.
    pub fn submit(&self, form: &HiddenForm) -> anyhow::Result<Url> {
        let mut url = self.resolve(form.request_path())?;
        url.set_fragment(None);

        tracing::info!(url = %url, method = %form.method, "submitting paste");
        let request = match form.method {
            FormMethod::Post => {
                let mut body = multipart::Form::new();
                for (name, value) in form.fields.iter() {
                    body = body.text(name.to_string(), value.to_string());
                }
                self.client.post(url.clone()).multipart(body)
            }
            FormMethod::Get => {
                let query: Vec<(&str, &str)> = form.fields.iter().collect();
                self.client.get(url.clone()).query(&query)
            }
        };

        let response = request
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| CliError::transport(format!("Submitting to {} failed: {}", url, e)))?;
        tracing::debug!(status = %response.status(), final_url = %response.url(), "server answered");
        Ok(response.url().clone())
    }

    /// Fetch a page's HTML. Any fragment on `url` is dropped first.
    pub fn fetch(&self, url: &Url) -> anyhow::Result<String> {
        let mut url = url.clone();
        url.set_fragment(None);

        tracing::info!(url = %url, "fetching paste page");
        self.client
            .get(url.clone())
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| CliError::transport(format!("Fetching {} failed: {}", url, e)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root_action_keeps_fragment() {
        let transport = HttpTransport::new("https://paste.example/app/").unwrap();
        let url = transport.resolve("/#a2V5").unwrap();

        assert_eq!(url.as_str(), "https://paste.example/#a2V5");
    }

    #[test]
    fn test_invalid_server_rejected() {
        let err = HttpTransport::new("not a url").err().unwrap();
        assert!(err.to_string().contains("Invalid server URL"));
    }
}
