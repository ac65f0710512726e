//! Skill bars
//!
//! Bars render at 0% and grow to their level shortly after the page loads.

use dioxus::prelude::*;
use portfolio_core::page::reveal::SKILL_BAR_DELAY;
use portfolio_core::page::Skill;

pub const SKILLS: [Skill; 6] = [
    Skill { name: "UiPath / RPA", level: Some(95) },
    Skill { name: "Python", level: Some(90) },
    Skill { name: "SQL", level: Some(85) },
    Skill { name: "Power Automate", level: Some(80) },
    Skill { name: "JavaScript", level: Some(70) },
    Skill { name: "Rust", level: None },
];

fn bar_style(skill: &Skill, grown: bool) -> String {
    let level = if grown { skill.target_width() } else { "0%".to_string() };
    format!("--current-level: {};", level)
}

#[component]
pub fn SkillList() -> Element {
    let mut grown = use_signal(|| false);

    use_future(move || async move {
        tokio::time::sleep(SKILL_BAR_DELAY).await;
        grown.set(true);
    });

    rsx! {
        div { class: "skills",
            for skill in SKILLS.iter() {
                div { key: "{skill.name}", class: "skill",
                    div { class: "skill-name",
                        span { "{skill.name}" }
                        span { "{skill.target_width()}" }
                    }
                    div { class: "skill-track",
                        div {
                            class: "skill-bar",
                            style: bar_style(skill, grown()),
                        }
                    }
                }
            }
        }
    }
}
