//! Demo catalog and browse filters. The catalog is rebuilt per call; pages
//! cache it in a `StoredValue` for the lifetime of the route.

use crate::features::marketplace::types::{ActivityItem, Asset, Club, ClubMember, Collection};

#[allow(clippy::too_many_arguments)]
fn asset(
    id: &'static str,
    name: &'static str,
    seed: &'static str,
    category: &'static str,
    creator: &'static str,
    price: f64,
    owner: &'static str,
    royalties: u8,
    description: &'static str,
) -> Asset {
    Asset {
        id,
        name,
        image_url: format!("https://picsum.photos/seed/{seed}/500/500"),
        category,
        creator,
        price,
        owner,
        royalties,
        description,
    }
}

fn avatar(handle: &str) -> String {
    format!("https://i.pravatar.cc/150?u={handle}")
}

/// Assets listed for sale on the marketplace page.
pub fn marketplace_assets() -> Vec<Asset> {
    vec![
        asset("m1", "Mystic Garden", "mysticgarden", "Art", "Liam Carter", 0.5, "Ava Harper", 5, "A magical digital garden blooming with surreal colors."),
        asset("m2", "Neon Alley", "neonalley", "Collectibles", "Daniel Martins", 0.7, "Ethan Blake", 6, "A glowing backstreet scene filled with neon lights and mystery."),
        asset("m3", "Whispering Pines", "pines", "Photography", "Maya Chen", 0.3, "Olivia Reed", 4, "Tranquil pine forest captured with soft natural light."),
        asset("m4", "Starlight Horizon", "starlight", "Art", "Victor Ramos", 0.9, "Noah Hayes", 5, "An ethereal night sky blending stars with vivid color streaks."),
        asset("m5", "Neon Skyline", "skyline", "3D Art", "Sofia Lee", 0.6, "Isabella Carter", 7, "A glowing futuristic skyline in vibrant 3D render."),
        asset("m6", "Digital Mirage", "mirage", "Art", "Amir Patel", 0.4, "Liam Foster", 5, "A surreal mirage with floating digital elements."),
        asset("m7", "Quantum Drift", "quantum", "Collectibles", "Nora Kim", 0.8, "Mia Bennett", 6, "An abstract collectible inspired by quantum mechanics."),
        asset("m8", "Pixel Oasis", "oasis", "Gaming", "Lucas Romero", 0.2, "Jackson Cole", 4, "A rare pixel-art oasis scene, perfect for retro game fans."),
        asset("m9", "Lo-Fi Beats Album", "lofi", "Music", "Miles Parker", 1.2, "Hannah Bell", 8, "A relaxing Lo-Fi beats album NFT for music lovers."),
        asset("m10", "AI Dreamscape", "aidream", "Digital Art", "Evelyn Zhao", 1.0, "Ryan Smith", 6, "A surreal dreamscape generated by AI algorithms."),
    ]
}

/// Trending assets shown on the home page.
pub fn trending_assets() -> Vec<Asset> {
    vec![
        asset("t1", "Crimson Tide", "crimson", "Art", "Liam Carter", 1.4, "Ethan Walker", 9, "A bold red abstract piece symbolizing passion and flow."),
        asset("t2", "Digital Totem", "totem", "Collectibles", "Daniel Martins", 0.95, "Mia Powell", 7, "A collectible digital sculpture inspired by ancient totems."),
        asset("t3", "Ocean Bloom", "ocean", "Art", "Maya Chen", 1.1, "Lucas Romero", 6, "A calming ocean scene with soft, dreamlike waves."),
        asset("t4", "Solar Maze", "maze", "3D Art", "Victor Ramos", 0.85, "Sofia Lee", 10, "A 3D maze inspired by solar flares and geometric patterns."),
        asset("t5", "Glass City", "glasscity", "Photography", "Sofia Lee", 0.65, "Olivia Reed", 5, "An urban cityscape reflected through glass architecture."),
        asset("t6", "Retro Synthwave", "synthwave", "Music", "Miles Parker", 1.3, "Hannah Bell", 8, "A nostalgic synthwave soundtrack with retro vibes."),
    ]
}

/// Assets owned by the signed-in demo profile.
pub fn owned_assets() -> Vec<Asset> {
    vec![
        asset("1", "Sunset Over Kyoto", "kyoto", "Art", "Emily Nguyen", 1.8, "Sophia Carter", 10, "A serene sunset over Kyoto, blending warm tones and minimal brushwork."),
        asset("2", "Dream in Colors", "dreamcolors", "Art", "Daniel Martins", 2.3, "Lucas Romero", 8, "An abstract exploration of color and emotion in motion."),
        asset("3", "Cyberpunk Portrait", "cyberportrait", "Collectibles", "Maya Chen", 0.75, "Olivia Reed", 5, "A futuristic portrait in neon hues, inspired by cyberpunk aesthetics."),
        asset("4", "Fractal Geometry", "fractal", "3D Art", "Victor Ramos", 1.1, "Ethan Walker", 12, "Intricate fractal shapes rendered in photorealistic 3D."),
        asset("5", "Midnight Dunes", "dunes", "Photography", "Emily Nguyen", 0.9, "Marcus Taylor", 7, "Desert dunes under a starlit night, captured in high contrast."),
        asset("6", "Minimal Stone Form", "ministone", "Sculpture", "Sofia Lee", 3.4, "Ava Harper", 15, "A smooth, minimalistic stone sculpture with natural textures."),
    ]
}

/// Assets minted by the signed-in demo profile.
pub fn created_assets() -> Vec<Asset> {
    vec![
        asset("c1", "Genesis Bloom", "genesis", "Art", "Emily Nguyen", 1.5, "Emily Nguyen", 5, "A vibrant generative art piece symbolizing new beginnings."),
        asset("c2", "Sui Horizon", "horizon", "Art", "Emily Nguyen", 2.1, "Marcus Taylor", 6, "A dreamy horizon with flowing, layered gradients."),
        asset("c3", "Rustic Dreams", "rustic", "Photography", "Emily Nguyen", 1.0, "Sofia Lee", 4, "A nostalgic rustic landscape, evoking calm and simplicity."),
    ]
}

/// Featured collections shown on the home page.
pub fn collections() -> Vec<Collection> {
    let collection = |id, name, description, seed: &str| Collection {
        id,
        name,
        description,
        image_url: format!("https://picsum.photos/seed/{seed}/600/400"),
    };
    vec![
        collection("col1", "Aurora Series", "A collection inspired by the northern lights and cosmic energy.", "aurora"),
        collection("col2", "Metaverse Relics", "Rare digital objects from across the metaverse.", "metaverse"),
        collection("col3", "Ethereal Dreams", "A selection of soft, dreamlike works to calm the mind.", "dreams"),
        collection("col4", "Pixel Heroes", "Retro-inspired pixel character collectibles.", "pixelheroes"),
        collection("col5", "Soundscapes", "Immersive music NFTs and generative beats.", "soundscapes"),
    ]
}

pub fn clubs() -> Vec<Club> {
    vec![
        Club {
            id: "club1",
            name: "Digital Art Collective",
            description: "A global community for digital artists and enthusiasts.",
            image_url: "https://picsum.photos/seed/club1/600/400".to_string(),
            member_count: 1250,
            members: vec![
                ClubMember { name: "Emily Nguyen", avatar_url: avatar("emilynguyen") },
                ClubMember { name: "Olivia Reed", avatar_url: avatar("olivia") },
            ],
            featured_asset_ids: vec!["m1", "m2", "m3", "m4"],
        },
        Club {
            id: "club2",
            name: "Pixel Pushers",
            description: "Celebrating the art of pixelated and generative creations.",
            image_url: "https://picsum.photos/seed/club2/600/400".to_string(),
            member_count: 840,
            members: vec![
                ClubMember { name: "Jackson Cole", avatar_url: avatar("jackson") },
                ClubMember { name: "Mia Bennett", avatar_url: avatar("mia") },
            ],
            featured_asset_ids: vec!["m5", "m6", "m7", "m8"],
        },
        Club {
            id: "club3",
            name: "Soundwave Society",
            description: "A hub for music producers, DJs, and NFT musicians.",
            image_url: "https://picsum.photos/seed/club3/600/400".to_string(),
            member_count: 540,
            members: vec![
                ClubMember { name: "Miles Parker", avatar_url: avatar("miles") },
                ClubMember { name: "Hannah Bell", avatar_url: avatar("hannah") },
            ],
            featured_asset_ids: vec!["m9", "m10"],
        },
    ]
}

pub fn club(id: &str) -> Option<Club> {
    clubs().into_iter().find(|club| club.id == id)
}

/// Looks an asset up across every catalog section.
pub fn asset_by_id(id: &str) -> Option<Asset> {
    marketplace_assets()
        .into_iter()
        .chain(trending_assets())
        .chain(owned_assets())
        .chain(created_assets())
        .find(|asset| asset.id == id)
}

/// Recent activity shown on the profile feed.
pub fn activity_feed() -> Vec<ActivityItem> {
    let item = |id, user, action, asset_name, seed: &str, price, timestamp| ActivityItem {
        id,
        user,
        action,
        asset_name,
        asset_image_url: format!("https://picsum.photos/seed/{seed}/100/100"),
        price,
        timestamp,
    };
    vec![
        item("act1", "CryptoPioneer", "purchased", "Starlight Horizon", "starlight", Some(0.9), "2 hours ago"),
        item("act2", "ArtCollector_88", "listed", "Quantum Drift", "quantum", Some(0.8), "5 hours ago"),
        item("act3", "Emily Nguyen", "minted", "Sui Horizon", "horizon", None, "1 day ago"),
        item("act4", "Noah Hayes", "sold", "Lo-Fi Beats Album", "lofi", Some(1.1), "3 days ago"),
    ]
}

/// Price filter bands offered on the marketplace page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PriceBand {
    #[default]
    All,
    UnderHalf,
    HalfToOne,
    OverOne,
}

impl PriceBand {
    pub const ALL: [PriceBand; 4] = [
        PriceBand::All,
        PriceBand::UnderHalf,
        PriceBand::HalfToOne,
        PriceBand::OverOne,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PriceBand::All => "All prices",
            PriceBand::UnderHalf => "Under 0.5 SUI",
            PriceBand::HalfToOne => "0.5 – 1 SUI",
            PriceBand::OverOne => "Over 1 SUI",
        }
    }

    pub fn from_label(label: &str) -> PriceBand {
        Self::ALL
            .into_iter()
            .find(|band| band.label() == label)
            .unwrap_or_default()
    }

    fn matches(self, price: f64) -> bool {
        match self {
            PriceBand::All => true,
            PriceBand::UnderHalf => price < 0.5,
            PriceBand::HalfToOne => (0.5..=1.0).contains(&price),
            PriceBand::OverOne => price > 1.0,
        }
    }
}

/// Category choices derived from the catalog, in first-seen order.
pub fn categories(assets: &[Asset]) -> Vec<&'static str> {
    let mut seen = vec!["All"];
    for asset in assets {
        if !seen.contains(&asset.category) {
            seen.push(asset.category);
        }
    }
    seen
}

/// Browse filter: case-insensitive name/creator search, category, price band.
pub fn filter_assets(
    assets: &[Asset],
    query: &str,
    category: &str,
    band: PriceBand,
) -> Vec<Asset> {
    let needle = query.trim().to_lowercase();
    assets
        .iter()
        .filter(|asset| {
            needle.is_empty()
                || asset.name.to_lowercase().contains(&needle)
                || asset.creator.to_lowercase().contains(&needle)
        })
        .filter(|asset| category == "All" || asset.category == category)
        .filter(|asset| band.matches(asset.price))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{PriceBand, categories, filter_assets, marketplace_assets};

    #[test]
    fn search_matches_name_and_creator_case_insensitively() {
        let assets = marketplace_assets();

        let by_name = filter_assets(&assets, "neon", "All", PriceBand::All);
        assert_eq!(by_name.len(), 2);

        let by_creator = filter_assets(&assets, "MILES parker", "All", PriceBand::All);
        assert_eq!(by_creator.len(), 1);
        assert_eq!(by_creator[0].name, "Lo-Fi Beats Album");
    }

    #[test]
    fn category_filter_uses_all_sentinel() {
        let assets = marketplace_assets();

        let art = filter_assets(&assets, "", "Art", PriceBand::All);
        assert!(art.iter().all(|asset| asset.category == "Art"));
        assert_eq!(art.len(), 3);

        let all = filter_assets(&assets, "", "All", PriceBand::All);
        assert_eq!(all.len(), assets.len());
    }

    #[test]
    fn price_bands_partition_the_catalog() {
        let assets = marketplace_assets();

        let under = filter_assets(&assets, "", "All", PriceBand::UnderHalf);
        let mid = filter_assets(&assets, "", "All", PriceBand::HalfToOne);
        let over = filter_assets(&assets, "", "All", PriceBand::OverOne);

        assert!(under.iter().all(|asset| asset.price < 0.5));
        assert!(mid.iter().all(|asset| (0.5..=1.0).contains(&asset.price)));
        assert!(over.iter().all(|asset| asset.price > 1.0));
        assert_eq!(under.len() + mid.len() + over.len(), assets.len());
    }

    #[test]
    fn filters_compose() {
        let assets = marketplace_assets();

        let hits = filter_assets(&assets, "neon", "Collectibles", PriceBand::HalfToOne);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Neon Alley");
    }

    #[test]
    fn categories_are_unique_and_led_by_all() {
        let assets = marketplace_assets();
        let list = categories(&assets);

        assert_eq!(list[0], "All");
        let mut deduped = list.clone();
        deduped.dedup();
        assert_eq!(deduped, list);
    }

    #[test]
    fn band_labels_round_trip() {
        for band in PriceBand::ALL {
            assert_eq!(PriceBand::from_label(band.label()), band);
        }
        assert_eq!(PriceBand::from_label("bogus"), PriceBand::All);
    }
}
