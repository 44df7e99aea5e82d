//! The About Us page document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::org_tree::{null_as_default, Forest};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutUs {
    #[serde(default, deserialize_with = "null_as_default")]
    pub company_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vision: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mission: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub history: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub organization_structure: Forest,
    #[serde(default, deserialize_with = "null_as_default")]
    pub social_media: SocialMedia,
    /// Keys this crate does not model (timestamps, owner ids, ...); a save
    /// writes them back as loaded.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Website,
    Facebook,
    Instagram,
    Linkedin,
    Twitter,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 5] = [
        SocialPlatform::Website,
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::Linkedin,
        SocialPlatform::Twitter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::Linkedin => "LinkedIn",
            Self::Twitter => "Twitter",
        }
    }
}

impl SocialMedia {
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        let slot = match platform {
            SocialPlatform::Website => &self.website,
            SocialPlatform::Facebook => &self.facebook,
            SocialPlatform::Instagram => &self.instagram,
            SocialPlatform::Linkedin => &self.linkedin,
            SocialPlatform::Twitter => &self.twitter,
        };
        slot.as_deref()
    }

    pub fn set(&mut self, platform: SocialPlatform, value: Option<String>) {
        let slot = match platform {
            SocialPlatform::Website => &mut self.website,
            SocialPlatform::Facebook => &mut self.facebook,
            SocialPlatform::Instagram => &mut self.instagram,
            SocialPlatform::Linkedin => &mut self.linkedin,
            SocialPlatform::Twitter => &mut self.twitter,
        };
        *slot = value;
    }
}

/// Every scalar field of [`AboutUs`] that the form can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    CompanyName,
    Description,
    LogoUrl,
    Vision,
    Mission,
    History,
    Email,
    Phone,
    Address,
    Social(SocialPlatform),
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            Self::CompanyName => "Company Name",
            Self::Description => "Company Description",
            Self::LogoUrl => "Logo URL",
            Self::Vision => "Vision",
            Self::Mission => "Mission",
            Self::History => "History",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address => "Address",
            Self::Social(platform) => platform.label(),
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::CompanyName => "Your company name",
            Self::Description => "Share your company's story, values, and what makes you stand out...",
            Self::LogoUrl => "https://...",
            Self::Vision => "Paint a picture of your company's future...",
            Self::Mission => "Define your purpose, values, and the difference you make...",
            Self::History => "Tell your origin story and celebrate milestones...",
            Self::Email => "hello@yourcompany.com",
            Self::Phone => "+62 xxx xxxx xxxx",
            Self::Address => "Your office address, city, postal code...",
            Self::Social(SocialPlatform::Website) => "https://mysite.com",
            Self::Social(SocialPlatform::Facebook) => "Facebook URL",
            Self::Social(SocialPlatform::Instagram) => "Instagram URL",
            Self::Social(SocialPlatform::Linkedin) => "LinkedIn URL",
            Self::Social(SocialPlatform::Twitter) => "Twitter/X URL",
        }
    }
}

impl AboutUs {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::CompanyName => &self.company_name,
            FormField::Description => &self.description,
            FormField::LogoUrl => self.logo_url.as_deref().unwrap_or(""),
            FormField::Vision => &self.vision,
            FormField::Mission => &self.mission,
            FormField::History => &self.history,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Address => &self.address,
            FormField::Social(platform) => self.social_media.get(platform).unwrap_or(""),
        }
    }

    /// Writes `value` into `field`. Optional fields are cleared by an empty value.
    pub fn set_field(&mut self, field: FormField, value: String) {
        let optional = if value.is_empty() { None } else { Some(value.clone()) };
        match field {
            FormField::CompanyName => self.company_name = value,
            FormField::Description => self.description = value,
            FormField::LogoUrl => self.logo_url = optional,
            FormField::Vision => self.vision = value,
            FormField::Mission => self.mission = value,
            FormField::History => self.history = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Address => self.address = value,
            FormField::Social(platform) => self.social_media.set(platform, optional),
        }
    }

    /// Display name for headers; falls back when the document has none.
    pub fn display_name(&self) -> &str {
        if self.company_name.trim().is_empty() {
            "Your Company"
        } else {
            &self.company_name
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/about_us.rs"]
mod tests;
