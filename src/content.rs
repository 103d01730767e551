#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub span_title: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Award {
    pub img: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentReason {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Bugatti Residences",
        span_title: "By Binghatti",
        image: "/assets/projects/bugatti-new.webp",
    },
    Project {
        title: "MERCEDES-BENZ PLACES",
        span_title: "Binghatti City",
        image: "/assets/projects/mercedes-benz-places-binghatti-city.webp",
    },
    Project {
        title: "MERCEDES-BENZ PLACES",
        span_title: "Binghatti",
        image: "/assets/projects/mercedes-new.webp",
    },
    Project {
        title: "Burj Binghatti",
        span_title: "Jacob&CO Residences",
        image: "/assets/projects/jacob-new.webp",
    },
];

const AWARD_TITLE: &str = "International Architecture Award 2023";

pub const AWARDS: &[Award] = &[
    Award { img: "/assets/awards/img-6.svg", title: AWARD_TITLE },
    Award { img: "/assets/awards/img-2.svg", title: AWARD_TITLE },
    Award { img: "/assets/awards/img-3.svg", title: AWARD_TITLE },
    Award { img: "/assets/awards/img-7.svg", title: AWARD_TITLE },
    Award { img: "/assets/awards/img-5.svg", title: AWARD_TITLE },
    Award { img: "/assets/awards/img-1.svg", title: AWARD_TITLE },
    Award { img: "/assets/awards/img-4.svg", title: AWARD_TITLE },
    Award { img: "/assets/awards/img-8.svg", title: AWARD_TITLE },
    Award { img: "/assets/awards/img-9.svg", title: AWARD_TITLE },
    Award { img: "/assets/awards/img-10.svg", title: AWARD_TITLE },
];

pub const INVESTMENT_REASONS: &[InvestmentReason] = &[
    InvestmentReason {
        icon: "📍",
        title: "Prime Locations",
        description: "Strategically located in Dubai's most sought-after neighborhoods with excellent connectivity",
    },
    InvestmentReason {
        icon: "✨",
        title: "Luxury Design",
        description: "World-class architecture and premium finishes that set new standards in luxury living",
    },
    InvestmentReason {
        icon: "📈",
        title: "Strong ROI",
        description: "Consistent capital appreciation and high rental yields in competitive markets",
    },
    InvestmentReason {
        icon: "🌿",
        title: "Sustainability",
        description: "Green building practices and eco-friendly features for sustainable living",
    },
    InvestmentReason {
        icon: "👥",
        title: "Community",
        description: "Vibrant lifestyle amenities and world-class facilities for residents",
    },
    InvestmentReason {
        icon: "🔒",
        title: "Security & Privacy",
        description: "Advanced security systems and 24/7 management for peace of mind",
    },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: "50+", label: "Projects" },
    Stat { value: "15K+", label: "Units Delivered" },
    Stat { value: "20+", label: "Years Legacy" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::carousel::CarouselController;

    #[test]
    fn project_carousel_has_four_slides() {
        let carousel = CarouselController::new(PROJECTS.to_vec()).unwrap();
        assert_eq!(carousel.len(), 4);
        assert_eq!(carousel.current().title, "Bugatti Residences");
    }

    #[test]
    fn award_images_are_distinct() {
        let mut imgs: Vec<&str> = AWARDS.iter().map(|a| a.img).collect();
        imgs.sort_unstable();
        imgs.dedup();
        assert_eq!(imgs.len(), AWARDS.len());
    }
}
