//! The portfolio page: hero, about, skills, projects and contact sections.

use dioxus::prelude::*;

use crate::bridge;
use crate::components::{ContactForm, ContactInfo, Header, Reveal, ScrollTop, SkillList};
use crate::context::use_reveal_set;

/// Featured projects: title and one-line description
const PROJECTS: [(&str, &str); 3] = [
    (
        "Invoice intake robot",
        "Reads supplier invoices from email, validates them against the ERP and files exceptions.",
    ),
    (
        "Payroll reconciliation",
        "Nightly comparison of payroll exports and bank statements with a summary report.",
    ),
    (
        "Onboarding orchestrator",
        "Creates accounts, licenses and welcome kits for new hires across five systems.",
    ),
];

#[component]
pub fn Home() -> Element {
    let mut revealed = use_reveal_set();

    // Observer starts once the sections are in the DOM
    use_future(move || async move {
        let mut observer = bridge::reveal_observer();
        loop {
            match observer.recv::<String>().await {
                Ok(id) => {
                    if revealed.write().mark(id.clone()) {
                        tracing::trace!(id, "Revealed");
                    }
                }
                Err(e) => {
                    tracing::warn!("Reveal observer stopped: {:?}", e);
                    break;
                }
            }
        }
    });

    rsx! {
        Header {}

        main {
            section { id: "home", class: "hero",
                Reveal { id: "hero-text".to_string(),
                    h1 { class: "hero-title", "Antônio Bernabio Júnior" }
                    p { class: "hero-subtitle", "RPA & Automation Specialist" }
                    a {
                        class: "btn btn-primary",
                        href: "#contact",
                        onclick: move |e| {
                            e.prevent_default();
                            spawn(async move { bridge::scroll_to_anchor("#contact").await });
                        },
                        "Get in touch"
                    }
                }
            }

            section { id: "about",
                h2 { class: "section-title", "About" }
                Reveal { id: "about-text".to_string(), animation: "fade-right".to_string(),
                    p {
                        "I design and maintain software robots that take repetitive work off "
                        "people's desks, from document intake to end-to-end back-office processes."
                    }
                }
            }

            section { id: "skills",
                h2 { class: "section-title", "Skills" }
                Reveal { id: "skills-list".to_string(), animation: "fade-left".to_string(),
                    SkillList {}
                }
            }

            section { id: "projects",
                h2 { class: "section-title", "Projects" }
                for (index, (title, description)) in PROJECTS.iter().enumerate() {
                    Reveal { key: "{index}", id: format!("project-{}", index),
                        article { class: "project-card",
                            h3 { "{title}" }
                            p { "{description}" }
                        }
                    }
                }
            }

            section { id: "contact",
                h2 { class: "section-title", "Contact" }
                div { class: "contact-grid",
                    Reveal { id: "contact-info".to_string(), animation: "fade-right".to_string(),
                        ContactInfo {}
                    }
                    Reveal { id: "contact-form-wrapper".to_string(), animation: "fade-left".to_string(),
                        ContactForm {}
                    }
                }
            }
        }

        ScrollTop {}
    }
}
