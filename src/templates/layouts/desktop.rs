use maud::{html, Markup, DOCTYPE};

/// Page shell. `refresh_secs` reloads the page so the figures follow the campaign.
pub fn desktop_layout(title: &str, refresh_secs: Option<u32>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if let Some(secs) = refresh_secs {
                    meta http-equiv="refresh" content=(secs);
                }
                title { (title) }
            }
            body {
              header {
                  h3 { "Les 2ndes SI tirent leurs fusées" }
              }
                (content)
            }
        }
    }
}
