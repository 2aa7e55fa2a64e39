use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdAward, LdBell, LdBookOpen, LdBuilding, LdCalendar, LdClipboard, LdClock,
    LdCreditCard, LdFileText, LdGraduationCap, LdInfo, LdShield, LdTrendingUp, LdUserCheck,
    LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::StatIcon;

/// Line icon for a [`StatIcon`] key.
#[component]
pub fn Glyph(icon: StatIcon, #[props(default = 20)] size: u32) -> Element {
    match icon {
        StatIcon::Chart => rsx! { Icon::<LdActivity> { icon: LdActivity, width: size, height: size } },
        StatIcon::Clock => rsx! { Icon::<LdClock> { icon: LdClock, width: size, height: size } },
        StatIcon::Award => rsx! { Icon::<LdAward> { icon: LdAward, width: size, height: size } },
        StatIcon::CreditCard => rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: size, height: size } },
        StatIcon::Building => rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: size, height: size } },
        StatIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: size, height: size } },
        StatIcon::BookOpen => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: size, height: size } },
        StatIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: size, height: size } },
        StatIcon::Bell => rsx! { Icon::<LdBell> { icon: LdBell, width: size, height: size } },
        StatIcon::FileText => rsx! { Icon::<LdFileText> { icon: LdFileText, width: size, height: size } },
        StatIcon::Clipboard => rsx! { Icon::<LdClipboard> { icon: LdClipboard, width: size, height: size } },
        StatIcon::Alert => rsx! { Icon::<LdInfo> { icon: LdInfo, width: size, height: size } },
        StatIcon::GraduationCap => rsx! { Icon::<LdGraduationCap> { icon: LdGraduationCap, width: size, height: size } },
        StatIcon::TrendingUp => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: size, height: size } },
        StatIcon::UserCheck => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: size, height: size } },
        StatIcon::Shield => rsx! { Icon::<LdShield> { icon: LdShield, width: size, height: size } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_renders_an_svg() {
        for icon in [StatIcon::Chart, StatIcon::Alert, StatIcon::Shield, StatIcon::CreditCard] {
            let html = dioxus_ssr::render_element(rsx! { Glyph { icon, size: 16 } });
            assert!(html.contains("<svg"), "{icon:?} rendered {html}");
        }
    }
}
