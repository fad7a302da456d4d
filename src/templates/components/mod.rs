use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn stat(label: &str, value: Markup) -> Markup {
    html! {
        div class="stat" {
            div class="stat-value" { (value) }
            div class="stat-label" { (label) }
        }
    }
}

/// Bar filled to `fill_pct`, with a tick at `marker_pct` (both 0..=100).
pub fn progress_bar(fill_pct: f64, marker_pct: f64) -> Markup {
    html! {
        div class="progress" role="progressbar" aria-valuenow=(format!("{fill_pct:.0}")) aria-valuemin="0" aria-valuemax="100" {
            div class="progress-fill" style=(format!("width: {fill_pct:.1}%")) {}
            div class="progress-marker" style=(format!("left: {marker_pct:.1}%")) {}
        }
    }
}

/// `1500.0` -> `1500€`, `1234.56` -> `1234.56€`.
pub fn euros(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}€")
    } else {
        format!("{amount:.2}€")
    }
}
