//! Planet models for the planet-detail screen.
//!
//! Planets come from a standalone JSON document (configured separately
//! from the library endpoint) and are fetched once at startup.

use serde::Deserialize;

/// One planet entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub satellites: Option<u32>,
    pub header_image_url: String,
    #[serde(default)]
    pub images: Vec<PlanetImage>,
}

/// One gallery image for a planet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetImage {
    pub image_url: String,
    #[serde(default)]
    pub hd_image_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_planet_document() {
        let doc = json!([{
            "title": "Mars",
            "description": "The red planet.",
            "satellites": 2,
            "headerImageUrl": "https://example.com/mars.jpg",
            "images": [
                { "imageUrl": "https://example.com/mars-1.jpg", "hdImageUrl": "https://example.com/mars-1-hd.jpg", "title": "Olympus Mons" }
            ]
        }]);
        let planets: Vec<Planet> = serde_json::from_value(doc).unwrap();
        assert_eq!(planets[0].title, "Mars");
        assert_eq!(planets[0].satellites, Some(2));
        assert_eq!(planets[0].images.len(), 1);
    }

    #[test]
    fn satellites_and_images_are_optional() {
        let doc = json!({
            "title": "Venus",
            "description": "No moons.",
            "headerImageUrl": "https://example.com/venus.jpg"
        });
        let planet: Planet = serde_json::from_value(doc).unwrap();
        assert!(planet.satellites.is_none());
        assert!(planet.images.is_empty());
    }
}
