//! Category descriptors for the browse surface.

use serde::Serialize;

use crate::design::Category;

/// Display metadata for one quote category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub id: Category,
    pub label: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        id: Category::Stoic,
        label: "Stoic Wisdom",
        description: "Ancient clarity for modern minds. Words on virtue, control and calm.",
        image: "/images/inspire/categories/stoic.jpg",
    },
    CategoryInfo {
        id: Category::Poetry,
        label: "Poetry",
        description: "Lines that linger. Verse from the poets who shaped how we feel.",
        image: "/images/inspire/categories/poetry.jpg",
    },
    CategoryInfo {
        id: Category::Entrepreneurship,
        label: "Entrepreneurship",
        description: "Fuel for builders, founders and anyone starting something new.",
        image: "/images/inspire/categories/entrepreneurship.jpg",
    },
    CategoryInfo {
        id: Category::Mindfulness,
        label: "Mindfulness",
        description: "Quiet reminders to slow down and stay present.",
        image: "/images/inspire/categories/mindfulness.jpg",
    },
    CategoryInfo {
        id: Category::Leadership,
        label: "Leadership",
        description: "Words for the people who lead, serve and show the way.",
        image: "/images/inspire/categories/leadership.jpg",
    },
    CategoryInfo {
        id: Category::Love,
        label: "Love",
        description: "Timeless lines about the people who matter most.",
        image: "/images/inspire/categories/love.jpg",
    },
];
