//! HTML projection of the supply board.

use std::sync::{PoisonError, RwLock};

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::{
    config::environment::Environment,
    domain::SupplyBoard,
    services::supply_store::BoardListener,
    view::board_view::{BoardView, TokenView},
};

const TOTAL_DESCRIPTION: &str = "Total USD on Ethereum";
const FEEDBACK_URL: &str = "https://t.me/lastmjs";
const FEEDBACK_HANDLE: &str = "@lastmjs";

const STYLE: &str = r#"
    body {
        background-color: white;
        font-family: sans-serif;
        margin: 0;
    }

    .supply-main-container {
        box-sizing: border-box;
        padding: calc(50px + 1vmin);
    }

    .supply-total-container {
        display: flex;
        justify-content: center;
    }

    .supply-card-container {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
    }

    .supply-card {
        color: orange;
        border: solid 5px grey;
        padding: calc(25px + 1vmin);
        margin: calc(5px + 1vmin);
        border-radius: calc(5px + 1vmin);
        display: flex;
        flex-direction: column;
        align-items: center;
        cursor: pointer;
        text-decoration: none;
    }

    .supply-amount-text {
        color: green;
        font-size: calc(50px + 1vmin);
    }

    .supply-description-text {
        color: grey;
        font-size: calc(25px + 1vmin);
    }

    .supply-footer {
        color: grey;
        display: flex;
        flex-direction: column;
        align-items: center;
        font-size: calc(10px + 1vmin);
        margin-top: calc(50px + 1vmin);
    }

    .supply-environment-badge {
        position: fixed;
        left: 25px;
        bottom: 25px;
        color: grey;
        opacity: .5;
    }
"#;

/// Renders the whole page for `board`. Pure, the same board always yields the same markup.
pub fn render_page(board: &SupplyBoard, environment: Environment) -> Markup {
    let view = BoardView::from(board);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (TOTAL_DESCRIPTION) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                @if !environment.is_production() {
                    div.supply-environment-badge { (environment.to_string()) }
                }
                div.supply-main-container {
                    div.supply-total-container {
                        a.supply-card href="/" {
                            div.supply-amount-text { (view.total.display) }
                            div.supply-description-text { (TOTAL_DESCRIPTION) }
                        }
                    }
                    div.supply-card-container {
                        @for token in &view.tokens {
                            (token_card(token))
                        }
                    }
                    (footer())
                }
            }
        }
    }
}

fn token_card(token: &TokenView) -> Markup {
    html! {
        a.supply-card href=(token.link) target="_blank" rel="noopener noreferrer" {
            div.supply-amount-text { (token.display) }
            div.supply-description-text { (token.name) }
        }
    }
}

fn footer() -> Markup {
    html! {
        div.supply-footer {
            div {
                "Feedback: "
                a href=(FEEDBACK_URL) target="_blank" rel="noopener noreferrer" { (FEEDBACK_HANDLE) }
            }
            div { a href="privacy.html" { "Privacy" } }
            div { a href="oss-attribution/attribution.txt" { "Open Source" } }
        }
    }
}

/// Keeps the rendered page of the latest board, re-rendering on every replace.
pub struct PageCache {
    environment: Environment,
    html: RwLock<String>,
}

impl PageCache {
    pub fn new(board: &SupplyBoard, environment: Environment) -> Self {
        Self {
            environment,
            html: RwLock::new(render_page(board, environment).into_string()),
        }
    }

    pub fn current(&self) -> String {
        self.html
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl BoardListener for PageCache {
    fn on_replace(&self, board: &SupplyBoard) {
        let rendered = render_page(board, self.environment).into_string();
        *self.html.write().unwrap_or_else(PoisonError::into_inner) = rendered;
    }
}
