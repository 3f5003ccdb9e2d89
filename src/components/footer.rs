use chrono::Datelike;
use yew::prelude::*;

pub fn copyright_line(year: i32) -> String {
    format!("© {} paired — all rights reserved", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="page-footer">
            {copyright_line(year)}
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(copyright_line(2026), "© 2026 paired — all rights reserved");
    }
}
