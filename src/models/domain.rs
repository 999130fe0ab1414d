use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

/// Head silhouette categories produced by the face analysis service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceShape {
    Oval,
    Square,
    Round,
    Heart,
    Oblong,
    Diamond,
}

impl FaceShape {
    pub const ALL: [FaceShape; 6] = [
        FaceShape::Oval,
        FaceShape::Square,
        FaceShape::Round,
        FaceShape::Heart,
        FaceShape::Oblong,
        FaceShape::Diamond,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaceShape::Oval => "Oval",
            FaceShape::Square => "Square",
            FaceShape::Round => "Round",
            FaceShape::Heart => "Heart",
            FaceShape::Oblong => "Oblong",
            FaceShape::Diamond => "Diamond",
        }
    }

    /// Exact, case-sensitive lookup of a tag in the fixed enumeration
    pub fn from_tag(tag: &str) -> Option<FaceShape> {
        Self::ALL.into_iter().find(|shape| shape.as_str() == tag)
    }
}

impl fmt::Display for FaceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FaceShape {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FaceShape::from_tag(s).ok_or_else(|| UnknownVariant::new("face shape", s))
    }
}

/// Catalog section a style belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleCategory {
    #[serde(rename = "hairstyle")]
    Hairstyle,
    #[serde(rename = "beard-style")]
    BeardStyle,
}

impl StyleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleCategory::Hairstyle => "hairstyle",
            StyleCategory::BeardStyle => "beard-style",
        }
    }
}

impl fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hairstyle" => Ok(StyleCategory::Hairstyle),
            "beard-style" => Ok(StyleCategory::BeardStyle),
            other => Err(UnknownVariant::new("style category", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(UnknownVariant::new("difficulty", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Maintenance {
    Low,
    #[default]
    Medium,
    High,
}

impl Maintenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Maintenance::Low => "Low",
            Maintenance::Medium => "Medium",
            Maintenance::High => "High",
        }
    }
}

impl FromStr for Maintenance {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Maintenance::Low),
            "Medium" => Ok(Maintenance::Medium),
            "High" => Ok(Maintenance::High),
            other => Err(UnknownVariant::new("maintenance", other)),
        }
    }
}

/// A stored value did not match any variant of a fixed enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Catalog entry describing a groomable look
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(alias = "type")]
    pub category: StyleCategory,
    #[serde(rename = "suitedFaceShapes")]
    pub suited_face_shapes: Vec<FaceShape>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub maintenance: Maintenance,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Style {
    /// Whether the raw face-shape tag is one of this style's suitability tags
    pub fn suits(&self, face_shape: &str) -> bool {
        self.suited_face_shapes
            .iter()
            .any(|shape| shape.as_str() == face_shape)
    }
}

/// Style as supplied by the seeding process, before it gets an identity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewStyle {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(url)]
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(alias = "type")]
    pub category: StyleCategory,
    #[validate(length(min = 1))]
    #[serde(rename = "suitedFaceShapes")]
    pub suited_face_shapes: Vec<FaceShape>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub maintenance: Maintenance,
}

impl NewStyle {
    /// Assign an identifier and timestamps. Duplicate face shapes collapse
    /// to their first occurrence.
    pub fn into_style(self) -> Style {
        let mut shapes: Vec<FaceShape> = Vec::with_capacity(self.suited_face_shapes.len());
        for shape in self.suited_face_shapes {
            if !shapes.contains(&shape) {
                shapes.push(shape);
            }
        }

        let now = Utc::now();
        Style {
            id: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            description: self.description,
            image_url: self.image_url,
            category: self.category,
            suited_face_shapes: shapes,
            difficulty: self.difficulty,
            maintenance: self.maintenance,
            created_at: now,
            updated_at: now,
        }
    }
}
