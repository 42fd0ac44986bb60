use serde::Deserialize;

#[derive(Deserialize)]
pub struct Pagination {
    ///
    /// indexing starts at 0
    ///
    #[serde(default)]
    pub page_idx: u32,

    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    20
}
