//! Static celestial body catalog
//!
//! The scene content is configuration data fixed at startup: one anchor body
//! (the Sun) plus eight planets, some with rings and moons. Malformed records
//! are a programmer error and abort startup.

use anyhow::{Result, bail};
use bevy::prelude::*;
use std::collections::HashSet;

/// Ring orientation relative to the ecliptic plane.
#[derive(Clone, Copy, Debug)]
pub enum RingTilt {
    /// Flat in the ecliptic plane.
    Flat,
    /// Standing upright, perpendicular to the ecliptic.
    Vertical,
    /// Tilted by the given angle in degrees.
    Degrees(f32),
}

/// Static decoration around a body; no dynamics.
#[derive(Clone, Debug)]
pub struct RingSpec {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub color: Color,
    pub tilt: RingTilt,
}

/// A satellite orbiting its parent body. Moons are never independently
/// selectable and carry no id.
#[derive(Clone, Debug)]
pub struct MoonRecord {
    pub body_radius: f32,
    pub orbit_radius: f32,
    /// Radians added to the moon's orbit angle per tick.
    pub angular_speed: f32,
    pub color: Color,
}

/// One celestial body, defined once at startup.
#[derive(Clone, Debug)]
pub struct BodyRecord {
    pub id: &'static str,
    pub color: Color,
    /// Distance from the scene center; 0 only for the anchor.
    pub orbit_radius: f32,
    pub body_radius: f32,
    /// Radians added to the orbit angle per tick; 0 for the anchor.
    pub angular_speed: f32,
    pub title: Option<&'static str>,
    pub text: Option<&'static str>,
    pub ring: Option<RingSpec>,
    pub moons: Vec<MoonRecord>,
}

impl BodyRecord {
    /// The anchor is the central, non-orbiting body.
    pub fn is_anchor(&self) -> bool {
        self.orbit_radius == 0.0 && self.angular_speed == 0.0
    }
}

/// The full body set, inserted as a resource after validation.
#[derive(Resource)]
pub struct BodyCatalog {
    pub bodies: Vec<BodyRecord>,
}

impl BodyCatalog {
    pub fn get(&self, id: &str) -> Option<&BodyRecord> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Startup sanity check: exactly one anchor, unique ids, sane radii.
    pub fn validate(&self) -> Result<()> {
        let anchors = self.bodies.iter().filter(|b| b.is_anchor()).count();
        if anchors != 1 {
            bail!("catalog must contain exactly one anchor body, found {anchors}");
        }
        let mut seen = HashSet::new();
        for body in &self.bodies {
            if !seen.insert(body.id) {
                bail!("duplicate body id {:?}", body.id);
            }
            if body.body_radius <= 0.0 {
                bail!("body {:?} has non-positive radius {}", body.id, body.body_radius);
            }
            if body.orbit_radius < 0.0 {
                bail!("body {:?} has negative orbit radius", body.id);
            }
            if body.angular_speed < 0.0 {
                bail!("body {:?} has negative angular speed", body.id);
            }
            for moon in &body.moons {
                if moon.body_radius <= 0.0 || moon.orbit_radius < 0.0 || moon.angular_speed < 0.0 {
                    bail!("body {:?} has a malformed moon record", body.id);
                }
            }
        }
        Ok(())
    }

    /// The portfolio scene: Sun plus the eight planets.
    pub fn standard() -> Self {
        let bodies = vec![
            BodyRecord {
                id: "Sun",
                color: Color::srgb(1.0, 0.9, 0.2),
                orbit_radius: 0.0,
                body_radius: 8.0,
                angular_speed: 0.0,
                title: Some("Welcome"),
                text: Some("Hi, I build software for a living.\nClick a planet or open the directory to explore."),
                ring: None,
                moons: vec![],
            },
            BodyRecord {
                id: "Mercury",
                color: Color::srgb(0.5, 0.5, 0.5),
                orbit_radius: 12.0,
                body_radius: 1.0,
                angular_speed: 0.001,
                title: Some("What am I doing?"),
                text: Some("Right now I am building interactive visualization tools\nand tinkering with rendering engines."),
                ring: None,
                moons: vec![],
            },
            BodyRecord {
                id: "Venus",
                color: Color::srgb(0.96, 0.87, 0.70),
                orbit_radius: 20.0,
                body_radius: 1.6,
                angular_speed: 0.002,
                title: Some("What have I done?"),
                text: Some("I teach at a free coding summer camp\nand mentor first-time contributors to open source."),
                ring: None,
                moons: vec![],
            },
            BodyRecord {
                id: "Earth",
                color: Color::srgb(0.23, 0.48, 0.84),
                orbit_radius: 28.0,
                body_radius: 1.7,
                angular_speed: 0.0015,
                title: Some("Where am I?"),
                text: Some("Born and raised on the west coast,\nnow studying computer science back east."),
                ring: None,
                moons: vec![MoonRecord {
                    body_radius: 0.4,
                    orbit_radius: 3.0,
                    angular_speed: 0.01,
                    color: Color::srgb(0.5, 0.5, 0.5),
                }],
            },
            BodyRecord {
                id: "Mars",
                color: Color::srgb(0.82, 0.30, 0.20),
                orbit_radius: 38.0,
                body_radius: 1.3,
                angular_speed: 0.001,
                title: Some("Where can you find me?"),
                text: Some("Reach me by email, or find my projects on GitHub."),
                ring: None,
                moons: vec![],
            },
            BodyRecord {
                id: "Jupiter",
                color: Color::srgb(0.82, 0.65, 0.47),
                orbit_radius: 50.0,
                body_radius: 5.0,
                angular_speed: 0.0008,
                title: Some("Other academic interests"),
                text: Some("Space, obviously. Also structural geology\nand more math than is strictly healthy."),
                ring: None,
                moons: vec![
                    MoonRecord {
                        body_radius: 0.5,
                        orbit_radius: 7.0,
                        angular_speed: 0.004,
                        color: Color::srgb(0.5, 0.5, 0.5),
                    },
                    MoonRecord {
                        body_radius: 0.35,
                        orbit_radius: 9.0,
                        angular_speed: 0.005,
                        color: Color::srgb(0.83, 0.83, 0.83),
                    },
                    MoonRecord {
                        body_radius: 0.25,
                        orbit_radius: 11.0,
                        angular_speed: 0.006,
                        color: Color::WHITE,
                    },
                ],
            },
            BodyRecord {
                id: "Saturn",
                color: Color::srgb(0.94, 0.90, 0.55),
                orbit_radius: 62.0,
                body_radius: 4.0,
                angular_speed: 0.0006,
                title: Some("Fun facts"),
                text: Some("I have lived on three continents\nand used to fence competitively."),
                ring: Some(RingSpec {
                    inner_radius: 5.0,
                    outer_radius: 7.0,
                    color: Color::srgb(0.83, 0.83, 0.83),
                    tilt: RingTilt::Degrees(95.0),
                }),
                moons: vec![],
            },
            BodyRecord {
                id: "Uranus",
                color: Color::srgb(0.50, 1.0, 0.83),
                orbit_radius: 72.0,
                body_radius: 2.5,
                angular_speed: 0.0004,
                title: Some("Outside of work"),
                text: Some("Theater, mostly stage management these days:\nthe people with headsets running lights and sound."),
                ring: Some(RingSpec {
                    inner_radius: 3.0,
                    outer_radius: 3.5,
                    color: Color::srgb(0.68, 0.85, 0.90),
                    tilt: RingTilt::Degrees(5.0),
                }),
                moons: vec![],
            },
            BodyRecord {
                id: "Neptune",
                color: Color::srgb(0.26, 0.41, 0.88),
                orbit_radius: 84.0,
                body_radius: 2.5,
                angular_speed: 0.0003,
                title: Some("What is next?"),
                text: Some("Shipping more tools, writing more Rust,\nand seeing where that leads."),
                ring: None,
                moons: vec![],
            },
        ];
        Self { bodies }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_body(id: &'static str, orbit_radius: f32, angular_speed: f32) -> BodyRecord {
        BodyRecord {
            id,
            color: Color::WHITE,
            orbit_radius,
            body_radius: 1.0,
            angular_speed,
            title: None,
            text: None,
            ring: None,
            moons: vec![],
        }
    }

    #[test]
    fn standard_catalog_is_valid() {
        let catalog = BodyCatalog::standard();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.bodies.len(), 9);
        assert_eq!(catalog.bodies.iter().filter(|b| b.is_anchor()).count(), 1);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let catalog = BodyCatalog {
            bodies: vec![
                plain_body("Sol", 0.0, 0.0),
                plain_body("Twin", 10.0, 0.01),
                plain_body("Twin", 20.0, 0.01),
            ],
        };
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn missing_anchor_rejected() {
        let catalog = BodyCatalog {
            bodies: vec![plain_body("A", 10.0, 0.01), plain_body("B", 20.0, 0.01)],
        };
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn two_anchors_rejected() {
        let catalog = BodyCatalog {
            bodies: vec![plain_body("A", 0.0, 0.0), plain_body("B", 0.0, 0.0)],
        };
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn non_positive_radius_rejected() {
        let mut bad = plain_body("A", 10.0, 0.01);
        bad.body_radius = -1.0;
        let catalog = BodyCatalog {
            bodies: vec![plain_body("Sol", 0.0, 0.0), bad],
        };
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn lookup_by_id() {
        let catalog = BodyCatalog::standard();
        assert!(catalog.get("Saturn").is_some_and(|b| b.ring.is_some()));
        assert!(catalog.get("Vulcan").is_none());
    }
}
