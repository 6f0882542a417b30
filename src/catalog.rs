//! Project catalog
//!
//! Static listing data and the detailed record shown on a project page,
//! with the display helpers both views share: FCFA amounts, funding
//! progress, French dates and image fallbacks. [`ProjectPage`] holds the
//! interactive state of a detail page (favourite, gallery selection,
//! comment box).

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::draft::Category;
use crate::notify::Notifier;

/// Listing entry for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub category: Category,
    pub raised_amount: u64,
    pub goal_amount: u64,
    pub supporters: u32,
    pub days_left: u32,
    pub image: &'static str,
    pub ai_score: u8,
}

impl ProjectSummary {
    pub fn progress(&self) -> u8 {
        funding_progress(self.raised_amount, self.goal_amount)
    }

    fn matches(&self, needle: &str) -> bool {
        [self.title, self.location, self.category.label()]
            .iter()
            .any(|haystack| haystack.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Organization {
    pub name: &'static str,
    pub logo: &'static str,
    pub verified: bool,
    pub projects: u32,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Update {
    pub date: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub user: &'static str,
    pub date: &'static str,
    pub content: &'static str,
}

impl Comment {
    /// Avatar fallback text ("Marie K." -> "M")
    pub fn initial(&self) -> String {
        self.user.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Document {
    pub name: &'static str,
    pub size: &'static str,
    pub kind: &'static str,
}

/// Full record for a project page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub summary: ProjectSummary,
    pub long_description: &'static str,
    pub start_date: Option<&'static str>,
    pub end_date: Option<&'static str>,
    pub gallery: &'static [&'static str],
    pub organization: Option<Organization>,
    pub updates: &'static [Update],
    pub comments: &'static [Comment],
    pub documents: &'static [Document],
    pub impact: &'static [&'static str],
}

impl ProjectDetail {
    /// Gallery images, or just the cover when the record has none
    pub fn images(&self) -> Vec<&'static str> {
        if self.gallery.is_empty() {
            vec![self.summary.image]
        } else {
            self.gallery.to_vec()
        }
    }

    /// Description split into paragraphs
    pub fn paragraphs(&self) -> impl Iterator<Item = &'static str> {
        self.long_description.split("\n\n").map(str::trim).filter(|p| !p.is_empty())
    }
}

static PROJECTS: [ProjectSummary; 6] = [
    ProjectSummary {
        id: 1,
        title: "Rénovation du parc municipal",
        description: "Amélioration des espaces verts et installation de jeux pour enfants au parc central.",
        location: "Cotonou, Bénin",
        category: Category::Environment,
        raised_amount: 3_200_000,
        goal_amount: 5_000_000,
        supporters: 47,
        days_left: 23,
        image: "/images/park-renovation.jpg",
        ai_score: 85,
    },
    ProjectSummary {
        id: 2,
        title: "Accès à l'eau potable - Quartier Nord",
        description: "Installation de 5 points d'eau potable dans les zones non desservies du quartier Nord.",
        location: "Lomé, Togo",
        category: Category::Infrastructure,
        raised_amount: 1_800_000,
        goal_amount: 3_000_000,
        supporters: 32,
        days_left: 15,
        image: "/images/water-access.jpg",
        ai_score: 92,
    },
    ProjectSummary {
        id: 3,
        title: "Programme d'alphabétisation numérique",
        description: "Cours d'initiation à l'informatique pour les jeunes et les femmes de la communauté.",
        location: "Porto-Novo, Bénin",
        category: Category::Education,
        raised_amount: 900_000,
        goal_amount: 2_000_000,
        supporters: 18,
        days_left: 35,
        image: "/images/digital-literacy.jpg",
        ai_score: 78,
    },
    ProjectSummary {
        id: 4,
        title: "Centre de santé communautaire",
        description: "Rénovation et équipement d'un petit centre de santé pour améliorer l'accès aux soins.",
        location: "Parakou, Bénin",
        category: Category::Health,
        raised_amount: 4_500_000,
        goal_amount: 7_000_000,
        supporters: 68,
        days_left: 12,
        image: "/images/health-center.jpg",
        ai_score: 94,
    },
    ProjectSummary {
        id: 5,
        title: "Électrification solaire de l'école",
        description: "Installation de panneaux solaires pour fournir de l'électricité à l'école du village.",
        location: "Kpalimé, Togo",
        category: Category::Energy,
        raised_amount: 1_200_000,
        goal_amount: 2_500_000,
        supporters: 29,
        days_left: 18,
        image: "/images/solar-school.jpg",
        ai_score: 89,
    },
    ProjectSummary {
        id: 6,
        title: "Programme de gestion des déchets",
        description: "Mise en place d'un système communautaire de collecte et tri des déchets.",
        location: "Abomey, Bénin",
        category: Category::Environment,
        raised_amount: 750_000,
        goal_amount: 1_500_000,
        supporters: 23,
        days_left: 28,
        image: "/images/waste-management.jpg",
        ai_score: 81,
    },
];

const PARK_DESCRIPTION: &str = "Notre projet vise à revitaliser le parc municipal du quartier Nord, un espace vert essentiel mais actuellement dégradé. Nous prévoyons d'installer de nouveaux équipements de jeux pour enfants, de créer des zones ombragées avec des bancs, d'améliorer les chemins piétonniers et de planter de nouvelles espèces végétales locales.

Ce parc est le seul espace vert dans un rayon de 3 km et sert quotidiennement à plus de 500 familles. Sa rénovation améliorera considérablement la qualité de vie des résidents, offrira un espace sûr pour les enfants et contribuera à la biodiversité urbaine.";

static PARK_GALLERY: [&str; 3] = [
    "/images/park-renovation.jpg",
    "/images/park-playground.jpg",
    "/images/park-benches.jpg",
];

static PARK_UPDATES: [Update; 2] = [
    Update {
        date: "2025-03-28",
        title: "Lancement du projet",
        content: "Nous sommes ravis d'annoncer le lancement officiel de notre campagne de financement pour la rénovation du parc municipal!",
    },
    Update {
        date: "2025-04-05",
        title: "Premier objectif atteint",
        content: "Grâce à votre générosité, nous avons atteint 30% de notre objectif en seulement 3 semaines. Un grand merci à tous les contributeurs!",
    },
];

static PARK_COMMENTS: [Comment; 2] = [
    Comment {
        user: "Marie K.",
        date: "2025-04-01",
        content: "Ce projet est exactement ce dont notre quartier a besoin. Mes enfants seront ravis d'avoir un espace de jeu rénové!",
    },
    Comment {
        user: "Thomas L.",
        date: "2025-04-03",
        content: "J'apprécie particulièrement l'aspect écologique du projet avec la plantation d'espèces locales. Avez-vous prévu un système d'irrigation durable?",
    },
];

static PARK_DOCUMENTS: [Document; 2] = [
    Document {
        name: "Plan_de_renovation.pdf",
        size: "2.4 MB",
        kind: "pdf",
    },
    Document {
        name: "Budget_detaille.xlsx",
        size: "1.1 MB",
        kind: "excel",
    },
];

static PARK_IMPACT: [&str; 4] = [
    "Amélioration de la qualité de vie pour plus de 2000 résidents",
    "Création d'un espace de loisirs sécurisé pour 500+ enfants",
    "Augmentation de 30% de la couverture végétale dans le quartier",
    "Réduction des îlots de chaleur urbains",
];

const BENIN_VERT: Organization = Organization {
    name: "Association pour un Bénin Vert",
    logo: "/images/benin-vert-logo.jpg",
    verified: true,
    projects: 12,
    description: "Association à but non lucratif fondée en 2018, dédiée à l'amélioration des espaces verts urbains et à la sensibilisation environnementale.",
};

/// Every listed project, in display order
pub fn projects() -> &'static [ProjectSummary] {
    &PROJECTS
}

pub fn find(id: u32) -> Option<&'static ProjectSummary> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Projects whose title, location or category contains `query`,
/// ignoring case. A blank query lists everything.
pub fn search(query: &str) -> Vec<&'static ProjectSummary> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return PROJECTS.iter().collect();
    }
    PROJECTS.iter().filter(|p| p.matches(&needle)).collect()
}

/// Detail record for a project page.
///
/// Project 1 carries the full record; the others are built from their
/// listing entry with empty sections.
pub fn detail(id: u32) -> Option<ProjectDetail> {
    let summary = *find(id)?;
    let detail = if id == 1 {
        ProjectDetail {
            summary,
            long_description: PARK_DESCRIPTION,
            start_date: Some("2025-03-15"),
            end_date: Some("2025-05-15"),
            gallery: &PARK_GALLERY,
            organization: Some(BENIN_VERT),
            updates: &PARK_UPDATES,
            comments: &PARK_COMMENTS,
            documents: &PARK_DOCUMENTS,
            impact: &PARK_IMPACT,
        }
    } else {
        ProjectDetail {
            summary,
            long_description: summary.description,
            start_date: None,
            end_date: None,
            gallery: &[],
            organization: None,
            updates: &[],
            comments: &[],
            documents: &[],
            impact: &[],
        }
    };
    Some(detail)
}

// ---- formatting ----

/// Amount in FCFA with French digit grouping ("3 200 000 FCFA").
///
/// Groups are separated by U+202F, the narrow no-break space French
/// number formatting uses.
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() * 2 + 5);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{202F}');
        }
        out.push(c);
    }
    out.push_str(" FCFA");
    out
}

/// Percentage of the goal raised, rounded and capped at 100
pub fn funding_progress(raised: u64, goal: u64) -> u8 {
    if goal == 0 {
        return 0;
    }
    let pct = (raised as f64 / goal as f64 * 100.0).round();
    pct.min(100.0) as u8
}

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Long French date from an ISO date ("2025-03-15" -> "15 mars 2025")
pub fn format_date_fr(iso: &str) -> Result<String, chrono::ParseError> {
    use chrono::Datelike;

    let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d")?;
    let month = MONTHS_FR[date.month0() as usize];
    Ok(format!("{} {} {}", date.day(), month, date.year()))
}

/// Like [`format_date_fr`], falling back to the raw text
pub fn display_date(iso: &str) -> String {
    format_date_fr(iso).unwrap_or_else(|_| iso.to_string())
}

/// Stand-in image for a project whose own image failed to load
pub fn placeholder_for(category: Category) -> &'static str {
    match category {
        Category::Environment => "/images/environment-placeholder.jpg",
        Category::Infrastructure => "/images/infrastructure-placeholder.jpg",
        Category::Education => "/images/education-placeholder.jpg",
        Category::Health => "/images/health-placeholder.jpg",
        Category::Energy => "/images/energy-placeholder.jpg",
        _ => "/placeholder.svg",
    }
}

// ---- image fallback ----

/// Images that failed to load
#[derive(Debug, Clone, Default)]
pub struct ImageFallback {
    failed: BTreeSet<String>,
}

impl ImageFallback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a load failure. Returns false if it was already recorded.
    pub fn mark_failed(&mut self, url: &str) -> bool {
        self.failed.insert(url.to_string())
    }

    pub fn is_failed(&self, url: &str) -> bool {
        self.failed.contains(url)
    }

    /// `url` unless it failed, in which case the category placeholder
    pub fn resolve<'a>(&self, url: &'a str, category: Category) -> &'a str {
        if self.is_failed(url) {
            placeholder_for(category)
        } else {
            url
        }
    }

    /// First image that has not failed, else the category placeholder
    pub fn first_available<'a>(&self, images: &[&'a str], category: Category) -> &'a str {
        images
            .iter()
            .copied()
            .find(|img| !self.is_failed(img))
            .unwrap_or_else(|| placeholder_for(category))
    }
}

// ---- detail page state ----

/// Interactive state of a project page
#[derive(Debug, Clone)]
pub struct ProjectPage {
    detail: ProjectDetail,
    liked: bool,
    selected: &'static str,
    fallback: ImageFallback,
    comment: String,
}

impl ProjectPage {
    pub fn new(detail: ProjectDetail) -> Self {
        let selected = detail.summary.image;
        Self {
            detail,
            liked: false,
            selected,
            fallback: ImageFallback::new(),
            comment: String::new(),
        }
    }

    pub fn open(id: u32) -> Option<Self> {
        detail(id).map(Self::new)
    }

    pub fn detail(&self) -> &ProjectDetail {
        &self.detail
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    /// Currently displayed gallery image
    pub fn selected_image(&self) -> &'static str {
        self.selected
    }

    /// Thumbnail URL, replaced by the placeholder once it failed
    pub fn thumbnail(&self, url: &'static str) -> &'static str {
        self.fallback.resolve(url, self.detail.summary.category)
    }

    pub fn select_image(&mut self, url: &'static str) {
        self.selected = url;
    }

    /// Record a failed image. If it was the selected one, move to the first
    /// image still loading, or the category placeholder.
    /// Record a failed image. Returns whether anything shown has to change.
    pub fn image_failed(&mut self, url: &str) -> bool {
        let newly = self.fallback.mark_failed(url);
        if url != self.selected {
            return newly;
        }

        let images = self.detail.images();
        let next = self.fallback.first_available(&images, self.detail.summary.category);
        if next == self.selected {
            return false;
        }
        self.selected = next;
        tracing::debug!(failed = url, now = self.selected, "gallery image fell back");
        true
    }

    pub fn toggle_like(&mut self, notifier: &mut Notifier) {
        self.liked = !self.liked;
        if self.liked {
            notifier.success("Ajouté aux favoris", "Projet ajouté à vos favoris");
        } else {
            notifier.info("Retiré des favoris", "Projet retiré de vos favoris");
        }
    }

    pub fn share(&self, notifier: &mut Notifier) {
        notifier.info("Partage", "Lien copié dans le presse-papier. Partagez avec vos amis!");
    }

    pub fn contribute(&self, notifier: &mut Notifier) {
        notifier.info("Contribution en cours", "Vous allez être redirigé vers la page de paiement.");
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn set_comment(&mut self, text: &str) {
        self.comment = text.to_string();
    }

    /// Send the comment box. Blank comments are ignored.
    pub fn submit_comment(&mut self, notifier: &mut Notifier) -> bool {
        if self.comment.trim().is_empty() {
            return false;
        }
        notifier.success("Commentaire envoyé", "Votre commentaire a été publié avec succès.");
        self.comment.clear();
        true
    }
}
