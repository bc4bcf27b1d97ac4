//! Landing page: hero banner and one card per featured language.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::state::nav::NavAction;
use crate::state::session::Session;

/// Featured language shown on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageCard {
    /// Tutorial id opened by both card buttons.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

pub const LANGUAGE_CARDS: [LanguageCard; 6] = [
    LanguageCard {
        id: "html",
        title: "HTML",
        description: "The language for building web pages",
        example: "<!DOCTYPE html>\n<html>\n<title>HTML Tutorial</title>\n<body>\n\n<h1>This is a heading</h1>\n<p>This is a paragraph.</p>\n\n</body>\n</html>",
    },
    LanguageCard {
        id: "css",
        title: "CSS",
        description: "The language for styling web pages",
        example: "body {\n  background-color: lightblue;\n}\n\nh1 {\n  color: white;\n  text-align: center;\n}\n\np {\n  font-family: verdana;\n}",
    },
    LanguageCard {
        id: "javascript",
        title: "JavaScript",
        description: "The language for programming web pages",
        example: "<button onclick=\"myFunction()\">Click Me!</button>\n\n<script>\nfunction myFunction() {\n  let x = document.getElementById(\"demo\");\n  x.style.fontSize = \"25px\";\n  x.style.color = \"red\";\n}\n</script>",
    },
    LanguageCard {
        id: "python",
        title: "Python",
        description: "A popular programming language",
        example: "if 5 > 2:\n  print(\"Five is greater than two!\")",
    },
    LanguageCard {
        id: "sql",
        title: "SQL",
        description: "A language for accessing databases",
        example: "SELECT * FROM Customers\nWHERE Country='Mexico';",
    },
    LanguageCard {
        id: "react",
        title: "React",
        description: "A library for building user interfaces",
        example: "function Greeting({ name }) {\n  return <h1>Hello, {name}!</h1>;\n}",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1>"Learn to Code"</h1>
                <p>"With the world's largest web developer site."</p>
            </section>
            <div class="home-cards">
                {LANGUAGE_CARDS.iter().map(|card| view! { <LanguageCardView card=*card/> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn LanguageCardView(card: LanguageCard) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let open = move |_| session.update(|s| s.dispatch(NavAction::Tutorial(card.id.to_owned())));

    view! {
        <div class="language-card" data-language=card.id>
            <div class="language-card__intro">
                <h2>{card.title}</h2>
                <p>{card.description}</p>
                <button class="btn btn--primary" on:click=open>{format!("Learn {}", card.title)}</button>
            </div>
            <div class="language-card__example">
                <h3>{format!("{} Example:", card.title)}</h3>
                <pre>
                    <code>{card.example}</code>
                </pre>
                <button class="btn btn--success" on:click=open>"Try it Yourself"</button>
            </div>
        </div>
    }
}
