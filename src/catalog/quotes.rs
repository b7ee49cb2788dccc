//! Curated quote table.

use crate::design::Category;

pub(crate) struct CuratedEntry {
    pub id: &'static str,
    pub text: &'static str,
    pub author: &'static str,
    pub author_title: Option<&'static str>,
    pub category: Category,
    pub tags: &'static [&'static str],
}

/// Ids shown on the landing page, in display order.
pub(crate) const FEATURED_IDS: &[&str] = &["q-1", "q-5", "q-9", "q-12", "q-16", "q-7"];

pub(crate) const CURATED: &[CuratedEntry] = &[
    // stoic
    CuratedEntry {
        id: "q-1",
        text: "You have power over your mind, not outside events. Realize this, and you will find strength.",
        author: "Marcus Aurelius",
        author_title: Some("Roman Emperor"),
        category: Category::Stoic,
        tags: &["strength", "mind", "resilience"],
    },
    CuratedEntry {
        id: "q-2",
        text: "We suffer more often in imagination than in reality.",
        author: "Seneca",
        author_title: Some("Philosopher"),
        category: Category::Stoic,
        tags: &["anxiety", "perspective"],
    },
    CuratedEntry {
        id: "q-3",
        text: "It's not what happens to you, but how you react to it that matters.",
        author: "Epictetus",
        author_title: Some("Philosopher"),
        category: Category::Stoic,
        tags: &["resilience", "choice"],
    },
    // poetry
    CuratedEntry {
        id: "q-4",
        text: "Hope is the thing with feathers that perches in the soul.",
        author: "Emily Dickinson",
        author_title: Some("Poet"),
        category: Category::Poetry,
        tags: &["hope", "soul"],
    },
    CuratedEntry {
        id: "q-5",
        text: "Keep your face always toward the sunshine, and shadows will fall behind you.",
        author: "Walt Whitman",
        author_title: Some("Poet"),
        category: Category::Poetry,
        tags: &["optimism", "light"],
    },
    CuratedEntry {
        id: "q-6",
        text: "Two roads diverged in a wood, and I took the one less traveled by, and that has made all the difference.",
        author: "Robert Frost",
        author_title: Some("Poet"),
        category: Category::Poetry,
        tags: &["choice", "journey"],
    },
    // entrepreneurship
    CuratedEntry {
        id: "q-7",
        text: "Whether you think you can, or you think you can't, you're right.",
        author: "Henry Ford",
        author_title: Some("Industrialist"),
        category: Category::Entrepreneurship,
        tags: &["belief", "mindset"],
    },
    CuratedEntry {
        id: "q-8",
        text: "Well done is better than well said.",
        author: "Benjamin Franklin",
        author_title: Some("Founding Father"),
        category: Category::Entrepreneurship,
        tags: &["action", "work"],
    },
    CuratedEntry {
        id: "q-9",
        text: "The way to get started is to quit talking and begin doing.",
        author: "Walt Disney",
        author_title: Some("Entrepreneur"),
        category: Category::Entrepreneurship,
        tags: &["action", "beginnings"],
    },
    // mindfulness
    CuratedEntry {
        id: "q-10",
        text: "Nature does not hurry, yet everything is accomplished.",
        author: "Lao Tzu",
        author_title: Some("Philosopher"),
        category: Category::Mindfulness,
        tags: &["patience", "nature"],
    },
    CuratedEntry {
        id: "q-11",
        text: "I went to the woods because I wished to live deliberately.",
        author: "Henry David Thoreau",
        author_title: Some("Writer"),
        category: Category::Mindfulness,
        tags: &["nature", "intention"],
    },
    CuratedEntry {
        id: "q-12",
        text: "Peace comes from within. Do not seek it without.",
        author: "Buddha",
        author_title: None,
        category: Category::Mindfulness,
        tags: &["peace", "calm"],
    },
    // leadership
    CuratedEntry {
        id: "q-13",
        text: "Do what you can, with what you have, where you are.",
        author: "Theodore Roosevelt",
        author_title: Some("26th U.S. President"),
        category: Category::Leadership,
        tags: &["action", "resourcefulness"],
    },
    CuratedEntry {
        id: "q-14",
        text: "If your actions inspire others to dream more, learn more, do more and become more, you are a leader.",
        author: "John Quincy Adams",
        author_title: Some("6th U.S. President"),
        category: Category::Leadership,
        tags: &["inspiration", "growth"],
    },
    CuratedEntry {
        id: "q-15",
        text: "A leader is best when people barely know he exists.",
        author: "Lao Tzu",
        author_title: Some("Philosopher"),
        category: Category::Leadership,
        tags: &["humility", "service"],
    },
    // love
    CuratedEntry {
        id: "q-16",
        text: "Love looks not with the eyes, but with the mind.",
        author: "William Shakespeare",
        author_title: Some("Playwright"),
        category: Category::Love,
        tags: &["romance", "mind"],
    },
    CuratedEntry {
        id: "q-17",
        text: "How do I love thee? Let me count the ways.",
        author: "Elizabeth Barrett Browning",
        author_title: Some("Poet"),
        category: Category::Love,
        tags: &["romance", "devotion"],
    },
    CuratedEntry {
        id: "q-18",
        text: "At the touch of love everyone becomes a poet.",
        author: "Plato",
        author_title: Some("Philosopher"),
        category: Category::Love,
        tags: &["romance", "poetry"],
    },
];
