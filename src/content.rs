//! Static site copy. The text lives in `content/site.json` so it can be edited
//! without touching components.

use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SiteContent {
    pub brand: String,
    pub links: Links,
    pub hero: Hero,
    pub about: About,
    pub services: Vec<Service>,
    pub stats_banner: Vec<Stat>,
    pub certificates: Vec<Certificate>,
    pub testimonials: Vec<Testimonial>,
    pub faqs: Vec<Faq>,
    pub contact: Contact,
    pub footer: Footer,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Links {
    pub blog: String,
    pub whatsapp: String,
    pub social: Vec<SocialLink>,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Search,
    Share,
    Target,
    Pen,
    FileText,
    Code,
    Instagram,
    Facebook,
    Linkedin,
    Whatsapp,
    Mail,
    MapPin,
    Phone,
    Check,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub icon: Icon,
    pub url: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Hero {
    pub title: Vec<String>,
    pub subtitle: String,
    pub image: String,
    pub image_alt: String,
    pub stats: Vec<Stat>,
}

/// A headline number. Animated stats count up from zero when revealed.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: u32,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
    #[serde(default = "animated_by_default")]
    pub animated: bool,
}

fn animated_by_default() -> bool {
    true
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct InlineLink {
    pub text: String,
    pub url: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Paragraph {
    pub text: String,
    #[serde(default)]
    pub link: Option<InlineLink>,
}

impl Paragraph {
    /// Splits the text around the first occurrence of the link text.
    pub fn split_link(&self) -> Option<(&str, &InlineLink, &str)> {
        let link = self.link.as_ref()?;
        let (before, after) = self.text.split_once(link.text.as_str())?;
        Some((before, link, after))
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct About {
    pub label: String,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub image_alt: String,
    pub paragraphs: Vec<Paragraph>,
    pub skills: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Certificate {
    pub image: String,
    pub title: String,
    pub issuer: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub title: String,
    pub website: String,
    pub text: String,
}

impl Testimonial {
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ContactDetail {
    pub icon: Icon,
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Contact {
    pub heading: String,
    pub details: Vec<ContactDetail>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Footer {
    pub tagline: String,
    pub owner: String,
}

pub fn load() -> Result<SiteContent, serde_json::Error> {
    serde_json::from_str(SITE_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = load().expect("site.json should deserialize");
        assert_eq!(content.brand, "KAMIL");
        assert_eq!(content.services.len(), 6);
        assert_eq!(content.certificates.len(), 3);
        assert_eq!(content.testimonials.len(), 4);
        assert_eq!(content.faqs.len(), 5);
        assert_eq!(content.stats_banner.len(), 4);
    }

    #[test]
    fn hero_rating_is_not_animated() {
        let content = load().unwrap();
        let animated: Vec<bool> = content.hero.stats.iter().map(|s| s.animated).collect();
        assert_eq!(animated, vec![true, true, true, false]);
        assert_eq!(content.hero.stats[2].suffix, "K+");
    }

    #[test]
    fn paragraph_splits_around_link() {
        let paragraph = Paragraph {
            text: "Trained at Studytrack in marketing.".to_string(),
            link: Some(InlineLink {
                text: "Studytrack".to_string(),
                url: "https://studytrack.in/".to_string(),
            }),
        };
        let (before, link, after) = paragraph.split_link().unwrap();
        assert_eq!(before, "Trained at ");
        assert_eq!(link.url, "https://studytrack.in/");
        assert_eq!(after, " in marketing.");

        let plain = Paragraph { text: "No link here".to_string(), link: None };
        assert!(plain.split_link().is_none());
    }

    #[test]
    fn testimonial_initial_from_name() {
        let content = load().unwrap();
        let initials: String = content.testimonials.iter().map(|t| t.initial()).collect();
        assert_eq!(initials, "MARR");
    }
}
