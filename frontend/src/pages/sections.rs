use gloo_timers::callback::Timeout;
use log::info;
use web_sys::HtmlInputElement;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::config;
use crate::pages::site_content::{
    AboutContent, ContactContent, FeaturesContent, HeroContent, ServicesContent, WhySinadContent,
};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: HeroContent,
}

#[function_component]
pub fn Hero(props: &HeroProps) -> Html {
    let content = &props.content;
    html! {
        <section id="hero" class="hero-section">
            <div class="hero-content">
                <h1 class="hero-title">{&content.title}</h1>
                <h2 class="hero-subtitle">{&content.subtitle}</h2>
                <p class="hero-description">{&content.description}</p>
                <div class="hero-buttons">
                    <a href="#services" class="button primary">{&content.cta}</a>
                    <a href="#contact" class="button secondary">{&content.secondary_cta}</a>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub content: AboutContent,
}

#[function_component]
pub fn About(props: &AboutProps) -> Html {
    let content = &props.content;
    html! {
        <section id="about" class="site-section">
            <SectionHeading title={content.title.clone()} subtitle={content.subtitle.clone()} />
            <p class="section-description">{&content.description}</p>
            <div class="card-grid">
                {
                    for content.values.iter().map(|value| html! {
                        <div class="card">
                            <div class="card-icon">{&value.icon}</div>
                            <h3>{&value.title}</h3>
                            <p>{&value.description}</p>
                        </div>
                    })
                }
            </div>
            <div class="stats-grid">
                {
                    for content.stats.iter().map(|stat| html! {
                        <div class="stat">
                            <div class="stat-value">{&stat.value}</div>
                            <div class="stat-label">{&stat.label}</div>
                        </div>
                    })
                }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct WhySinadProps {
    pub content: WhySinadContent,
}

#[function_component]
pub fn WhySinad(props: &WhySinadProps) -> Html {
    let content = &props.content;
    html! {
        <section id="whySinad" class="site-section">
            <SectionHeading title={content.title.clone()} subtitle={content.subtitle.clone()} />
            <p class="section-description">{&content.description}</p>
            <div class="card-grid">
                {
                    for content.reasons.iter().map(|reason| html! {
                        <div class={classes!("card", "reason-card", format!("reason-{}", reason.icon))}>
                            <h3>{&reason.title}</h3>
                            <p>{&reason.description}</p>
                        </div>
                    })
                }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub content: ServicesContent,
}

#[function_component]
pub fn Services(props: &ServicesProps) -> Html {
    let content = &props.content;
    html! {
        <section id="services" class="site-section">
            <SectionHeading title={content.title.clone()} subtitle={content.subtitle.clone()} />
            <p class="section-description">{&content.description}</p>
            <div class="card-grid">
                {
                    for content.services.iter().map(|service| html! {
                        <div class={classes!("card", format!("service-{}", service.icon))}>
                            <h3>{&service.title}</h3>
                            <p>{&service.description}</p>
                            <ul class="feature-list">
                                { for service.features.iter().map(|feature| html! { <li>{feature}</li> }) }
                            </ul>
                        </div>
                    })
                }
            </div>
            <div class="cta-box">
                <h3>{&content.cta.title}</h3>
                <p>{&content.cta.description}</p>
                <a href="#contact" class="button primary">{&content.cta.button_text}</a>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub content: FeaturesContent,
}

#[function_component]
pub fn Features(props: &FeaturesProps) -> Html {
    let content = &props.content;
    html! {
        <section id="features" class="site-section">
            <SectionHeading title={content.title.clone()} subtitle={content.subtitle.clone()} />
            <p class="section-description">{&content.description}</p>
            <div class="feature-rows">
                {
                    for content.main_features.iter().enumerate().map(|(index, feature)| html! {
                        <div class={classes!("feature-row", (index % 2 == 1).then(|| "reversed"))}>
                            <div class={classes!("feature-visual", format!("visual-{}", feature.image))}></div>
                            <div class="feature-text">
                                <h3>{&feature.title}</h3>
                                <p>{&feature.description}</p>
                            </div>
                        </div>
                    })
                }
            </div>
            <div class="card-grid">
                {
                    for content.benefits.iter().map(|benefit| html! {
                        <div class={classes!("card", format!("benefit-{}", benefit.icon))}>
                            <h3>{&benefit.title}</h3>
                            <p>{&benefit.description}</p>
                        </div>
                    })
                }
            </div>
            <div class="cta-box">
                <h3>{&content.cta.title}</h3>
                <p>{&content.cta.description}</p>
                <div class="hero-buttons">
                    <a href="#contact" class="button primary">{&content.cta.primary_button}</a>
                    <a href="#features" class="button secondary">{&content.cta.secondary_button}</a>
                </div>
            </div>
        </section>
    }
}

#[derive(Clone, Default, PartialEq)]
struct ContactForm {
    name: String,
    email: String,
    company: String,
    message: String,
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub content: ContactContent,
}

#[function_component]
pub fn Contact(props: &ContactProps) -> Html {
    let content = &props.content;
    let labels = &content.form_labels;
    let form = use_state(ContactForm::default);
    let submitted = use_state(|| false);
    let ack_timer = use_mut_ref(|| None::<Timeout>);

    let update = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_name = update(|form, value| form.name = value);
    let on_email = update(|form, value| form.email = value);
    let on_company = update(|form, value| form.company = value);
    let on_message = update(|form, value| form.message = value);

    // Nothing leaves the page; the form only acknowledges and clears itself.
    let onsubmit = {
        let form = form.clone();
        let submitted = submitted.clone();
        let ack_timer = ack_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Contact form submitted by {}", form.email);
            form.set(ContactForm::default());
            submitted.set(true);
            let submitted = submitted.clone();
            *ack_timer.borrow_mut() = Some(Timeout::new(config::CONTACT_ACK_MS, move || {
                submitted.set(false);
            }));
        })
    };

    let input_text = |callback: Callback<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            callback.emit(input.value());
        })
    };

    html! {
        <section id="contact" class="site-section">
            <SectionHeading title={content.title.clone()} subtitle={content.subtitle.clone()} />
            <p class="section-description">{&content.description}</p>
            <div class="contact-grid">
                <div class="contact-details">
                    <p><strong>{"Office: "}</strong>{&content.office_address}</p>
                    <p><strong>{"Email: "}</strong><a href={format!("mailto:{}", content.email)}>{&content.email}</a></p>
                    <p><strong>{"Phone: "}</strong>{&content.phone}</p>
                    <p><strong>{"Location: "}</strong>{&content.map_location}</p>
                    <div class="social-links">
                        {
                            for content.social_media.iter().map(|social| html! {
                                <a href={social.url.clone()} target="_blank" rel="noopener noreferrer"
                                    class={classes!("social-link", social.icon.clone())}>
                                    {&social.name}
                                </a>
                            })
                        }
                    </div>
                </div>
                <form class="contact-form" onsubmit={onsubmit}>
                    if *submitted {
                        <p class="contact-ack">{"Thank you for your message! We'll get back to you soon."}</p>
                    }
                    <label>{&labels.name}</label>
                    <input type="text" required=true value={form.name.clone()} oninput={input_text(on_name)} />
                    <label>{&labels.email}</label>
                    <input type="email" required=true value={form.email.clone()} oninput={input_text(on_email)} />
                    <label>{&labels.company}</label>
                    <input type="text" value={form.company.clone()} oninput={input_text(on_company)} />
                    <label>{&labels.message}</label>
                    <textarea rows="5" required=true value={form.message.clone()}
                        oninput={Callback::from(move |e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            on_message.emit(input.value());
                        })}
                    />
                    <button type="submit" class="button primary">{&labels.submit}</button>
                </form>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    title: String,
    subtitle: String,
}

#[function_component]
fn SectionHeading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <h2>{&props.title}</h2>
            <h3>{&props.subtitle}</h3>
        </div>
    }
}
