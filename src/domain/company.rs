use serde::Serialize;

/// The fixed set of overview fields a company page's description list can
/// carry. Labels that normalize to anything outside this set are dropped
/// instead of minting a new key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyDetail {
    Website,
    Industry,
    CompanySize,
    Headquarters,
    Founded,
    Type,
    Specialties,
}

/// Key form of a description-list label: spaces stripped, lowercased.
/// "Company size" becomes "companysize".
pub fn normalize_label(label: &str) -> String {
    label.replace(' ', "").to_lowercase()
}

pub fn detail_from_label(label: &str) -> Option<CompanyDetail> {
    match normalize_label(label).as_str() {
        "website" => Some(CompanyDetail::Website),
        "industry" => Some(CompanyDetail::Industry),
        "companysize" => Some(CompanyDetail::CompanySize),
        "headquarters" => Some(CompanyDetail::Headquarters),
        "founded" => Some(CompanyDetail::Founded),
        "type" => Some(CompanyDetail::Type),
        "specialties" => Some(CompanyDetail::Specialties),
        _ => None,
    }
}

/// One scraped company page, flattened. `url`, `companyName` and `about` are
/// always serialized; the detail fields and `avatarUrl` are left out of the
/// payload entirely when the page didn't yield them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub url: String,
    pub company_name: String,
    pub about: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl CompanyRecord {
    pub fn new(url: &str) -> Self {
        CompanyRecord {
            url: url.to_string(),
            ..Default::default()
        }
    }

    pub fn set_detail(&mut self, detail: CompanyDetail, value: String) {
        match detail {
            CompanyDetail::Website => self.website = Some(value),
            CompanyDetail::Industry => self.industry = Some(value),
            CompanyDetail::CompanySize => self.company_size = Some(value),
            CompanyDetail::Headquarters => self.headquarters = Some(value),
            CompanyDetail::Founded => self.founded = Some(value),
            CompanyDetail::Type => self.company_type = Some(value),
            CompanyDetail::Specialties => self.specialties = Some(value),
        }
    }
}
