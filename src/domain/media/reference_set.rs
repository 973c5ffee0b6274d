//! Reference image roles

use std::fmt;

use super::encoded_image::EncodedImage;

/// The role a reference image plays in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceRole {
    Face,
    Location,
    Items,
}

impl ReferenceRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Face => "face",
            Self::Location => "location",
            Self::Items => "items",
        }
    }
}

impl fmt::Display for ReferenceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An optional reference role
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReferenceSlot {
    Present(EncodedImage),
    #[default]
    Absent,
}

impl ReferenceSlot {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn image(&self) -> Option<&EncodedImage> {
        match self {
            Self::Present(image) => Some(image),
            Self::Absent => None,
        }
    }
}

impl From<Option<EncodedImage>> for ReferenceSlot {
    fn from(image: Option<EncodedImage>) -> Self {
        image.map_or(Self::Absent, Self::Present)
    }
}

/// Which optional reference images accompany the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReferenceFlags {
    pub has_location: bool,
    pub has_items: bool,
}

/// The reference images of one generation request.
/// The face role is required, so a set cannot exist without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceImageSet {
    face: EncodedImage,
    location: ReferenceSlot,
    items: ReferenceSlot,
}

impl ReferenceImageSet {
    /// A set holding only the face reference
    pub fn new(face: EncodedImage) -> Self {
        Self {
            face,
            location: ReferenceSlot::Absent,
            items: ReferenceSlot::Absent,
        }
    }

    /// Attach a location reference
    pub fn with_location(mut self, location: impl Into<ReferenceSlot>) -> Self {
        self.location = location.into();
        self
    }

    /// Attach an items/clothing reference
    pub fn with_items(mut self, items: impl Into<ReferenceSlot>) -> Self {
        self.items = items.into();
        self
    }

    pub fn face(&self) -> &EncodedImage {
        &self.face
    }

    pub fn location(&self) -> &ReferenceSlot {
        &self.location
    }

    pub fn items(&self) -> &ReferenceSlot {
        &self.items
    }

    /// Present images in request order: face, location, items
    pub fn ordered(&self) -> Vec<(ReferenceRole, &EncodedImage)> {
        let mut images = vec![(ReferenceRole::Face, &self.face)];
        if let Some(location) = self.location.image() {
            images.push((ReferenceRole::Location, location));
        }
        if let Some(items) = self.items.image() {
            images.push((ReferenceRole::Items, items));
        }
        images
    }

    /// Flags describing the optional roles
    pub fn flags(&self) -> ReferenceFlags {
        ReferenceFlags {
            has_location: self.location.is_present(),
            has_items: self.items.is_present(),
        }
    }
}

impl From<EncodedImage> for ReferenceSlot {
    fn from(image: EncodedImage) -> Self {
        Self::Present(image)
    }
}
