/// The two headings the light theme can flip between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tagline {
    Primary,
    Alternate,
}

impl Tagline {
    pub fn from_toggle(toggled: bool) -> Self {
        if toggled {
            Tagline::Alternate
        } else {
            Tagline::Primary
        }
    }

    pub fn lines(self) -> [&'static str; 2] {
        match self {
            Tagline::Primary => ["build your circle.", "keep it rare."],
            Tagline::Alternate => ["the few, not the feed.", "access moves quietly."],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signup::{FormAction, SignupForm, SignupStatus};

    #[test]
    fn toggling_flips_between_two_headings() {
        let off = Tagline::from_toggle(false);
        let on = Tagline::from_toggle(true);
        assert_eq!(off.lines(), ["build your circle.", "keep it rare."]);
        assert_eq!(on.lines(), ["the few, not the feed.", "access moves quietly."]);
    }

    #[test]
    fn toggling_tagline_leaves_form_state_untouched() {
        let form = SignupForm::default()
            .apply(FormAction::Edit("a@harvard.edu".into()))
            .apply(FormAction::Submit);
        let before = form.clone();

        let mut toggled = false;
        for _ in 0..3 {
            toggled = !toggled;
            let _ = Tagline::from_toggle(toggled).lines();
        }

        assert_eq!(form, before);
        assert_eq!(form.email, "a@harvard.edu");
        assert_eq!(form.status, SignupStatus::Loading);
    }
}
