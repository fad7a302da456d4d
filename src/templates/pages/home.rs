// templates/pages/home.rs

use crate::donations::DonationSnapshot;
use crate::templates::{card, desktop_layout, euros, progress_bar, stat};
use maud::{html, Markup};

/// Same cadence as the front end's polling of `/api/donation-progress`.
pub const REFRESH_SECS: u32 = 60;

/// Campaign progress page. `None` means the campaign page could not be
/// fetched; placeholders are shown instead of an error.
pub fn home_page(snapshot: Option<&DonationSnapshot>) -> Markup {
    desktop_layout(
        "Cagnotte fusées",
        Some(REFRESH_SECS),
        html! {
            main class="container" {
                @match snapshot {
                    Some(s) => { (progress_card(s)) }
                    None => {
                        (card("Cagnotte", html! {
                            p class="placeholder" { "Sync..." }
                        }))
                    }
                }

                p class="live" {
                    "Live : "
                    @match snapshot {
                        Some(s) => { (s.last_updated) }
                        None => { "Sync..." }
                    }
                }
            }
        },
    )
}

fn progress_card(s: &DonationSnapshot) -> Markup {
    card(
        "Cagnotte",
        html! {
            p class="collected" { (euros(s.collected.value())) " récoltés" }

            (progress_bar(s.percent_of_optimum(), s.min_marker_percent()))

            div class="goals" {
                div class="goal-min" { "Minimum" br; (euros(s.min_goal.value())) }
                div class="goal-opt" { "Optimum" br; (euros(s.opt_goal.value())) }
            }

            div class="stats" {
                (stat("Donateurs", html! { (s.donors.value()) }))
                (stat("Jours restants", html! { (s.days_left.value()) }))
            }
        },
    )
}
