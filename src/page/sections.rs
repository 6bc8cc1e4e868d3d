use crate::{
    animation::preset::PresetName,
    content::model::{Content, Icon, Profile},
    foundation::{core::Millis, error::FolioResult},
    page::{
        cards,
        node::{Element, el},
        section::{SectionFrame, SectionVariant, ViewportTrigger, reveal_on_mount},
    },
};

/// Visible fraction for section headers and the hero/contact columns.
pub const HEADER_REVEAL_AMOUNT: f64 = 0.3;
/// Visible fraction for the card grids.
pub const GRID_REVEAL_AMOUNT: f64 = 0.2;
/// The hero scroll hint appears this long after load.
pub const SCROLL_HINT_DELAY: Millis = Millis(1500);

fn trigger(amount: f64, e: Element) -> Element {
    ViewportTrigger::new(amount).apply(e)
}

fn cursor(accent: &str) -> Element {
    el("span").class("cursor").class(accent).text("_")
}

/// Three-dot window chrome with a file name.
fn terminal_window(file: &str, prompt: &str, accent: &str, title: &str, caption: &str) -> Element {
    let dots = ["red", "yellow", "green"]
        .into_iter()
        .map(|c| el("span").class("terminal__dot").class(&format!("terminal__dot--{c}")));

    el("div")
        .class("terminal")
        .child(
            el("div")
                .class("terminal__bar")
                .children(dots)
                .child(el("span").class("terminal__file").text(file)),
        )
        .child(
            el("div")
                .class("terminal__body")
                .child(
                    el("div")
                        .class("terminal__title")
                        .child(el("span").class("prompt").class(accent).text(prompt))
                        .child(el("h2").text(title).child(cursor(accent))),
                )
                .child(el("p").class("terminal__caption").text(caption)),
        )
}

fn command_header(prompt: &str, accent: &str, command: &str, title: &str) -> Element {
    el("div")
        .class("command")
        .child(
            el("div")
                .class("command__line")
                .child(el("span").class("prompt").class(accent).text(prompt))
                .child(el("span").text(command)),
        )
        .child(el("h2").text(title).child(cursor(accent)))
}

fn grid(columns: u8) -> Element {
    trigger(
        GRID_REVEAL_AMOUNT,
        el("div")
            .class("grid")
            .class(&format!("grid--{columns}"))
            .motion(PresetName::StaggerContainer),
    )
}

fn hero_prompt(profile: &Profile) -> Element {
    el("div")
        .class("hero__prompt")
        .motion(PresetName::FadeInDown)
        .child(el("span").class("accent-cyber").text(&profile.prompt))
        .child(el("span").class("muted").text(":"))
        .child(el("span").class("accent-dev").text("~"))
        .child(el("span").class("muted").text("$"))
        .child(el("span").class("hero__command").text("whoami"))
}

fn scroll_hint() -> Element {
    reveal_on_mount(
        el("div")
            .class("scroll-hint")
            .motion(PresetName::HintReveal)
            .delay(SCROLL_HINT_DELAY),
    )
    .child(el("span").class("scroll-hint__label").text("scroll down"))
    .child(
        el("div")
            .class("scroll-hint__mouse")
            .motion(PresetName::ScrollHint)
            .child(
                el("div")
                    .class("scroll-hint__wheel")
                    .motion(PresetName::ScrollWheel),
            ),
    )
}

pub fn hero(profile: &Profile) -> FolioResult<Element> {
    let name = el("h1")
        .class("hero__name")
        .motion(PresetName::FadeInUp)
        .child(el("span").text(format!("{} ", profile.first_name)))
        .child(el("span").class("gradient-text").text(&profile.last_name));

    let headline = el("div")
        .class("hero__headline")
        .motion(PresetName::FadeInUp)
        .child(el("span").class("status-dot").motion(PresetName::Pulse))
        .child(el("p").text(&profile.headline));

    let actions = el("div")
        .class("hero__actions")
        .motion(PresetName::StaggerContainer)
        .child(
            el("a")
                .class("button button--primary")
                .attr("href", "#cyber-skills")
                .motion(PresetName::StaggerItem)
                .hover(PresetName::ButtonHover)
                .text("View My Work"),
        )
        .child(
            el("a")
                .class("button button--ghost")
                .attr("href", "#contact")
                .motion(PresetName::StaggerItem)
                .hover(PresetName::ButtonHover)
                .text("Contact Me"),
        );

    let column = trigger(
        HEADER_REVEAL_AMOUNT,
        el("div")
            .class("hero")
            .motion(PresetName::StaggerContainer)
            .child(hero_prompt(profile))
            .child(name)
            .child(headline)
            .child(actions),
    );

    SectionFrame::new("hero", SectionVariant::Default)
        .overflow_visible()
        .child(column)
        .child(scroll_hint())
        .render()
}

pub fn cyber_skills(content: &Content) -> FolioResult<Element> {
    let variant = SectionVariant::Cyber;
    let header = trigger(
        HEADER_REVEAL_AMOUNT,
        el("div")
            .class("section-header")
            .motion(PresetName::HeaderReveal)
            .child(terminal_window(
                "cyber_skills.sh",
                "❯",
                "accent-cyber",
                "Cybersecurity Skills",
                &format!("// {}", content.profile.cyber_tagline),
            )),
    );
    let categories = grid(2).children(
        content
            .cyber_skills
            .iter()
            .map(|c| cards::category_card(c, variant, |s, _| cards::skill_card(s))),
    );

    SectionFrame::new("cyber-skills", variant)
        .child(header)
        .child(categories)
        .render()
}

pub fn cyber_projects(content: &Content) -> FolioResult<Element> {
    let header = trigger(
        HEADER_REVEAL_AMOUNT,
        command_header("❯", "accent-cyber", "ls ./security-projects/", "Security Projects")
            .class("section-header section-header--center")
            .motion(PresetName::FadeInUp)
            .child(
                el("p")
                    .class("section-header__caption")
                    .text("// Reports, CTF writeups, and custom security tools"),
            ),
    );
    let projects = grid(2).children(content.cyber_projects.iter().map(cards::cyber_project_card));

    SectionFrame::new("cyber-projects", SectionVariant::Cyber)
        .child(header)
        .child(projects)
        .render()
}

pub fn dev_skills(content: &Content) -> FolioResult<Element> {
    let variant = SectionVariant::Dev;
    let header = trigger(
        HEADER_REVEAL_AMOUNT,
        el("div")
            .class("section-header")
            .motion(PresetName::HeaderReveal)
            .child(terminal_window(
                "dev_skills.json",
                "{",
                "accent-dev",
                "Development Skills",
                &format!("\"description\": \"{}\"", content.profile.dev_tagline),
            )),
    );
    let categories = grid(3).children(
        content
            .dev_skills
            .iter()
            .map(|c| cards::category_card(c, variant, cards::skill_chip)),
    );

    SectionFrame::new("dev-skills", variant)
        .child(header)
        .child(categories)
        .render()
}

pub fn dev_projects(content: &Content) -> FolioResult<Element> {
    let header = trigger(
        HEADER_REVEAL_AMOUNT,
        command_header("$", "accent-dev", "npm run showcase --projects", "Development Projects")
            .class("section-header section-header--center")
            .motion(PresetName::FadeInUp),
    );
    let projects = grid(2).class("grid--compact").children(
        content
            .dev_projects
            .iter()
            .enumerate()
            .map(|(i, p)| cards::dev_project_card(p, i)),
    );

    SectionFrame::new("dev-projects", SectionVariant::Dev)
        .child(header)
        .child(projects)
        .render()
}

pub fn contact(content: &Content) -> FolioResult<Element> {
    let profile = &content.profile;

    let command = el("div")
        .class("command__line")
        .motion(PresetName::FadeInUp)
        .child(el("span").class("prompt accent-cyber").text("❯"))
        .child(el("span").text("./contact.sh --connect"));

    let title = el("h2")
        .class("contact__title")
        .motion(PresetName::FadeInUp)
        .text("Get In Touch")
        .child(cursor("accent-cyber"));

    let pitch = el("p")
        .class("contact__pitch")
        .motion(PresetName::FadeInUp)
        .text("// Ready to collaborate on your next project? ")
        .child(el("br"))
        .text("// Whether it's security testing or building applications, let's talk.");

    let mail = el("a")
        .class("button button--solid contact__mail")
        .attr("href", profile.mailto())
        .motion(PresetName::FadeInUp)
        .hover(PresetName::ButtonHover)
        .child(cards::icon(Icon::Mail))
        .child(el("span").text("Send Message"))
        .child(cards::icon(Icon::Send));

    let socials = el("div")
        .class("contact__social")
        .motion(PresetName::FadeInUp)
        .child(el("p").class("contact__hint").text("// Or find me on social media"))
        .child(trigger(
            cards::LIST_REVEAL_AMOUNT,
            el("div")
                .class("social-grid")
                .motion(PresetName::StaggerContainer)
                .children(content.social.iter().map(cards::social_card)),
        ));

    let footer = el("footer")
        .class("contact__footer")
        .motion(PresetName::FadeInUp)
        .child(
            el("p")
                .child(el("span").class("accent-cyber").text("©"))
                .text(format!(" {} {}. ", profile.copyright_year, profile.full_name()))
                .child(el("span").class("separator").text("|"))
                .text(" Built with ")
                .child(el("span").class("accent-dev").text("Rust"))
                .text(" + ")
                .child(el("span").class("accent-cyber").text("CSS")),
        )
        .child(el("p").class("contact__credits").text("// Designed & developed with <3"));

    let column = trigger(
        HEADER_REVEAL_AMOUNT,
        el("div")
            .class("contact")
            .motion(PresetName::StaggerContainer)
            .children([command, title, pitch, mail, socials, footer]),
    );

    SectionFrame::new("contact", SectionVariant::Default)
        .child(column)
        .render()
}

#[cfg(test)]
#[path = "../../tests/unit/page/sections.rs"]
mod tests;
