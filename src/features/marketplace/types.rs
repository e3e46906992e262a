//! Catalog types backing the browse pages.

#[derive(Clone, Debug, PartialEq)]
pub struct Asset {
    pub id: &'static str,
    pub name: &'static str,
    pub image_url: String,
    pub category: &'static str,
    pub creator: &'static str,
    pub price: f64,
    pub owner: &'static str,
    pub royalties: u8,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Collection {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub image_url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClubMember {
    pub name: &'static str,
    pub avatar_url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Club {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub image_url: String,
    pub member_count: u32,
    pub members: Vec<ClubMember>,
    pub featured_asset_ids: Vec<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityItem {
    pub id: &'static str,
    pub user: &'static str,
    pub action: &'static str,
    pub asset_name: &'static str,
    pub asset_image_url: String,
    pub price: Option<f64>,
    pub timestamp: &'static str,
}
