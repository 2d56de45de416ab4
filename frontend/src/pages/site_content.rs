//! Typed views of the content document used by the public page sections.
//!
//! Each section falls back to the copy below when the document has no entry for
//! it. A section that is present but misses fields gets those fields from the
//! same defaults. `null` values count as missing, and a field (or list entry)
//! of the wrong shape is skipped on its own instead of discarding the section.

use log::warn;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::cms::document::ContentDocument;

pub fn section_content<T: DeserializeOwned + Default>(document: &ContentDocument, key: &str) -> T {
    let Some(value) = document.section(key) else {
        return T::default();
    };
    let mut value = value.clone();
    prune_nulls(&mut value);
    if let Ok(content) = T::deserialize(&value) {
        return content;
    }

    let usable = match value {
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .filter(|(field, entry)| {
                    let single: Map<String, Value> =
                        [(field.clone(), entry.clone())].into_iter().collect();
                    fits::<T>(key, field, &Value::Object(single))
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .filter(|(index, item)| {
                    fits::<T>(key, &index.to_string(), &Value::Array(vec![item.clone()]))
                })
                .map(|(_, item)| item)
                .collect(),
        ),
        Value::Null => return T::default(),
        _ => {
            warn!("Section `{}` does not fit its layout, using defaults", key);
            return T::default();
        }
    };
    T::deserialize(&usable).unwrap_or_else(|e| {
        warn!("Section `{}` does not fit its layout, using defaults: {}", key, e);
        T::default()
    })
}

fn fits<T: DeserializeOwned>(section: &str, entry: &str, candidate: &Value) -> bool {
    match T::deserialize(candidate) {
        Ok(_) => true,
        Err(e) => {
            warn!("Skipping `{}` in section `{}`: {}", entry, section, e);
            false
        }
    }
}

/// Drops `null` object members at every depth so they read as absent.
fn prune_nulls(value: &mut Value) {
    match value {
        Value::Object(fields) => {
            fields.retain(|_, entry| !entry.is_null());
            fields.values_mut().for_each(prune_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(prune_nulls),
        _ => {}
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavLink {
    pub name: String,
    pub href: String,
    pub submenu: Vec<NavLink>,
}

impl NavLink {
    fn new(name: &str, href: &str) -> Self {
        Self {
            name: name.to_string(),
            href: href.to_string(),
            submenu: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct NavLinks(pub Vec<NavLink>);

impl Default for NavLinks {
    fn default() -> Self {
        let mut services = NavLink::new("Services", "#services");
        services.submenu = vec![
            NavLink::new("Consulting", "#services"),
            NavLink::new("Ezykube", "#features"),
        ];
        Self(vec![
            NavLink::new("Home", "#hero"),
            NavLink::new("About", "#about"),
            services,
            NavLink::new("Contact", "#contact"),
        ])
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta: String,
    pub secondary_cta: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            title: "Simplifying Cloud & Kubernetes Excellence".to_string(),
            subtitle: "DevOps, Kubernetes, and Cloud Solutions for Enterprise Innovation".to_string(),
            description: "Expert consulting and proprietary solutions that transform your infrastructure and operations".to_string(),
            cta: "Learn More".to_string(),
            secondary_cta: "Contact Us".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Card {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Card {
    fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub values: Vec<Card>,
    pub stats: Vec<Stat>,
}

impl Default for AboutContent {
    fn default() -> Self {
        let stat = |value: &str, label: &str| Stat {
            value: value.to_string(),
            label: label.to_string(),
        };
        Self {
            title: "About Sinad.io".to_string(),
            subtitle: "Your Trusted Partner in IT Innovation".to_string(),
            description: "Sinad.io is a leading IT consulting firm specializing in DevOps, Kubernetes, and Cloud Computing. Our team of experts brings years of experience to tackle complex infrastructure challenges and deliver efficient, scalable solutions.".to_string(),
            values: vec![
                Card::new("🚀", "Innovation", "We're constantly exploring emerging technologies to provide cutting-edge solutions."),
                Card::new("🔧", "Expertise", "Our team consists of certified professionals with deep technical knowledge."),
                Card::new("🤝", "Partnership", "We work closely with clients to understand their unique needs and challenges."),
                Card::new("💡", "Simplicity", "We transform complex problems into elegant, user-friendly solutions."),
            ],
            stats: vec![
                stat("98%", "Client Satisfaction"),
                stat("150+", "Projects Delivered"),
                stat("15+", "Years Experience"),
                stat("50+", "Enterprise Clients"),
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WhySinadContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub reasons: Vec<Card>,
}

impl Default for WhySinadContent {
    fn default() -> Self {
        Self {
            title: "Why Choose Sinad.io".to_string(),
            subtitle: "Expertise That Delivers Results".to_string(),
            description: "We combine deep technical knowledge with a practical, client-first approach to deliver infrastructure that works.".to_string(),
            reasons: vec![
                Card::new("clarity", "Clear Roadmaps", "Every engagement starts with a transparent plan, milestones and measurable outcomes."),
                Card::new("experience", "Proven Experience", "Our engineers have run production Kubernetes and cloud platforms at enterprise scale."),
                Card::new("solutions", "Tailored Solutions", "We design around your constraints instead of forcing a one-size-fits-all stack."),
                Card::new("partnership", "True Partnership", "We work alongside your team and leave them confident to run what we build."),
                Card::new("innovation", "Continuous Innovation", "We bring proven new tooling into your platform as the ecosystem evolves."),
                Card::new("support", "Dedicated Support", "Responsive help when you need it, from rollout through day-two operations."),
            ],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceCard {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallToAction {
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub primary_button: String,
    pub secondary_button: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServicesContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub services: Vec<ServiceCard>,
    pub cta: CallToAction,
}

impl Default for ServicesContent {
    fn default() -> Self {
        let service = |icon: &str, title: &str, description: &str, features: &[&str]| ServiceCard {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            features: owned(features),
        };
        Self {
            title: "Our Services".to_string(),
            subtitle: "Comprehensive IT Solutions".to_string(),
            description: "We provide end-to-end services for your cloud infrastructure, Kubernetes deployments, and DevOps implementations.".to_string(),
            services: vec![
                service("cloud", "Cloud Consulting", "Strategic guidance for optimal cloud architecture, migration strategies, and multi-cloud environments.", &["Cloud architecture design", "Migration planning", "Cost optimization", "Security assessment"]),
                service("kubernetes", "Kubernetes Expertise", "Specialized consulting and implementation services for container orchestration and Kubernetes environments.", &["Cluster setup & management", "Application deployment", "Performance tuning", "Security hardening"]),
                service("devops", "DevOps Implementation", "End-to-end DevOps transformation with CI/CD pipelines, automation, and cultural guidance.", &["CI/CD pipeline setup", "Infrastructure as Code", "Monitoring solutions", "Team enablement"]),
                service("security", "Cloud Security", "Comprehensive security solutions for your cloud infrastructure and Kubernetes deployments.", &["Security posture assessment", "Compliance automation", "Threat detection", "Zero-trust implementation"]),
            ],
            cta: CallToAction {
                title: "Need Custom Solutions?".to_string(),
                description: "We tailor our services to meet your specific requirements and challenges.".to_string(),
                button_text: "Contact Us".to_string(),
                ..CallToAction::default()
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MainFeature {
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturesContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub main_features: Vec<MainFeature>,
    pub benefits: Vec<Card>,
    pub cta: CallToAction,
}

impl Default for FeaturesContent {
    fn default() -> Self {
        let feature = |title: &str, description: &str, image: &str| MainFeature {
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
        };
        Self {
            title: "EzyKube".to_string(),
            subtitle: "Simplifying Kubernetes Management".to_string(),
            description: "Our flagship product designed to make Kubernetes accessible, manageable, and efficient for teams of all sizes.".to_string(),
            main_features: vec![
                feature("Intuitive Dashboard", "Visualize your entire Kubernetes infrastructure with our user-friendly dashboard that simplifies cluster management.", "dashboard"),
                feature("One-Click Deployments", "Deploy applications to your Kubernetes clusters with simple, repeatable configurations and zero downtime.", "deployment"),
                feature("Automated Scaling", "Intelligently scale your applications based on real-time metrics and predefined rules.", "scaling"),
            ],
            benefits: vec![
                Card::new("speed", "50% Faster Deployment", "Reduce your deployment time and focus on innovation rather than infrastructure."),
                Card::new("cost", "30% Cost Reduction", "Optimize resource utilization and automatically scale down when not needed."),
                Card::new("security", "Enhanced Security", "Built-in security scanning and compliance checks for your applications."),
                Card::new("simplicity", "Reduced Complexity", "Abstract away Kubernetes complexities while maintaining full control."),
            ],
            cta: CallToAction {
                title: "Ready to Simplify Kubernetes?".to_string(),
                description: "Get started with EzyKube today and transform how you manage containerized applications.".to_string(),
                primary_button: "Request Demo".to_string(),
                secondary_button: "Learn More".to_string(),
                ..CallToAction::default()
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

fn default_social_links() -> Vec<SocialLink> {
    [
        ("LinkedIn", "https://linkedin.com/company/sinadllc", "linkedin"),
        ("Twitter", "https://twitter.com/sinadllc", "twitter"),
        ("GitHub", "https://github.com/sinadllc", "github"),
    ]
    .iter()
    .map(|(name, url, icon)| SocialLink {
        name: name.to_string(),
        url: url.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormLabels {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub submit: String,
}

impl Default for FormLabels {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            email: "Email Address".to_string(),
            company: "Company Name".to_string(),
            message: "Your Message".to_string(),
            submit: "Send Message".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub office_address: String,
    pub email: String,
    pub phone: String,
    pub form_labels: FormLabels,
    pub map_location: String,
    pub social_media: Vec<SocialLink>,
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            title: "Contact Us".to_string(),
            subtitle: "Get in Touch".to_string(),
            description: "Have questions about our services or want to learn more about EzyKube? Reach out to our team and we'll get back to you as soon as possible.".to_string(),
            office_address: "123 Tech Park, Silicon Valley, CA 94043".to_string(),
            email: "info@sinadllc.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            form_labels: FormLabels::default(),
            map_location: "San Francisco, CA".to_string(),
            social_media: default_social_links(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterContent {
    pub company_name: String,
    pub tagline: String,
    pub quick_links: Vec<NavLink>,
    pub resources: Vec<NavLink>,
    pub legal: Vec<NavLink>,
    pub social_media: Vec<SocialLink>,
    /// Rendered with the current year when absent.
    pub copyright: Option<String>,
    pub address: String,
    pub email: String,
}

impl Default for FooterContent {
    fn default() -> Self {
        let links = |pairs: &[(&str, &str)]| -> Vec<NavLink> {
            pairs.iter().map(|(name, href)| NavLink::new(name, href)).collect()
        };
        Self {
            company_name: "SINAD LLC".to_string(),
            tagline: "Simplifying Cloud & Kubernetes Excellence".to_string(),
            quick_links: links(&[
                ("Home", "#hero"),
                ("About", "#about"),
                ("Services", "#services"),
                ("EzyKube", "#features"),
                ("Contact", "#contact"),
            ]),
            resources: links(&[
                ("Documentation", "#"),
                ("Blog", "#"),
                ("Knowledge Base", "#"),
                ("Case Studies", "#"),
            ]),
            legal: links(&[
                ("Privacy Policy", "#"),
                ("Terms of Service", "#"),
                ("Cookie Policy", "#"),
            ]),
            social_media: default_social_links(),
            copyright: None,
            address: "123 Tech Park, Silicon Valley, CA 94043".to_string(),
            email: "info@sinadllc.com".to_string(),
        }
    }
}
