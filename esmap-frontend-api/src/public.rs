use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use esmap_boundary::{
    AuthUser, Credentials, JsonAdvertisement, JsonBranch, JsonReview, JsonTheme, NewBranchRequest,
    NewReviewRequest, Registration,
};

use crate::{into_json, into_json_or_default, into_unit, Result};

/// Public EscapeMap backend API
#[derive(Debug, Clone)]
pub struct PublicApi {
    url: String,
    client: reqwest::Client,
}

impl PublicApi {
    #[must_use]
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.url)
    }

    fn encoded(id: &str) -> String {
        utf8_percent_encode(id, NON_ALPHANUMERIC).to_string()
    }

    pub async fn branches(&self) -> Result<Vec<JsonBranch>> {
        let response = self.client.get(self.endpoint("/branches")).send().await?;
        into_json_or_default(response).await
    }

    pub async fn branch(&self, id: &str) -> Result<JsonBranch> {
        let url = self.endpoint(&format!("/branches/{}", Self::encoded(id)));
        let response = self.client.get(url).send().await?;
        into_json(response).await
    }

    pub async fn create_branch(&self, branch: &NewBranchRequest) -> Result<JsonBranch> {
        let response = self
            .client
            .post(self.endpoint("/branches"))
            .json(branch)
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn delete_branch(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&format!("/branches/{}/delete", Self::encoded(id)));
        let response = self.client.post(url).send().await?;
        into_unit(response).await
    }

    pub async fn themes(&self) -> Result<Vec<JsonTheme>> {
        let response = self.client.get(self.endpoint("/themes")).send().await?;
        into_json_or_default(response).await
    }

    pub async fn theme(&self, id: &str) -> Result<JsonTheme> {
        let url = self.endpoint(&format!("/themes/{}", Self::encoded(id)));
        let response = self.client.get(url).send().await?;
        into_json(response).await
    }

    pub async fn themes_of_branch(&self, branch_id: &str) -> Result<Vec<JsonTheme>> {
        let url = self.endpoint(&format!("/branches/{}/themes", Self::encoded(branch_id)));
        let response = self.client.get(url).send().await?;
        into_json_or_default(response).await
    }

    pub async fn reviews_of_theme(&self, theme_id: &str) -> Result<Vec<JsonReview>> {
        let url = self.endpoint(&format!("/themes/{}/reviews", Self::encoded(theme_id)));
        let response = self.client.get(url).send().await?;
        into_json_or_default(response).await
    }

    pub async fn create_review(&self, review: &NewReviewRequest) -> Result<JsonReview> {
        let response = self
            .client
            .post(self.endpoint("/reviews"))
            .json(review)
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn delete_review(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&format!("/reviews/{}/delete", Self::encoded(id)));
        let response = self.client.post(url).send().await?;
        into_unit(response).await
    }

    pub async fn advertisements(&self) -> Result<Vec<JsonAdvertisement>> {
        let response = self
            .client
            .get(self.endpoint("/advertisements"))
            .send()
            .await?;
        into_json_or_default(response).await
    }

    pub async fn register(&self, registration: &Registration) -> Result<AuthUser> {
        let response = self
            .client
            .post(self.endpoint("/auth/register"))
            .json(registration)
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthUser> {
        let response = self
            .client
            .post(self.endpoint("/auth/login"))
            .json(credentials)
            .send()
            .await?;
        into_json(response).await
    }
}
