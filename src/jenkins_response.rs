#[derive(Deserialize)]
pub struct JenkinsJobResponse {
    #[serde(default)]
    pub jobs: Vec<JenkinsJob>,
}

// Folders and multibranch projects come back without a color, or with `"color": null`.
#[derive(Deserialize)]
pub struct JenkinsJob {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl JenkinsJob {
    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or("")
    }
}
