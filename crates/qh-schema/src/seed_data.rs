//! Fixed reference data consumed by the migration units.
//!
//! Seed content lives here as explicit versioned data rather than inline
//! literals inside the units, so it can be audited and tested on its own.

/// Bumped whenever a seed row is added or changed.
pub const SEED_VERSION: u32 = 1;

/// One default question category.
pub struct CategorySeed {
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

/// The five default categories every deployment starts with.
pub const DEFAULT_CATEGORIES: [CategorySeed; 5] = [
    CategorySeed {
        name: "LGBT+",
        description: "Conceitos, siglas e vivências da comunidade LGBT+",
        color: "#E40303",
        icon: "🏳️‍🌈",
    },
    CategorySeed {
        name: "História Queer",
        description: "Marcos e movimentos da história LGBT+ no Brasil e no mundo",
        color: "#FF8C00",
        icon: "📜",
    },
    CategorySeed {
        name: "Cultura Pop",
        description: "Música, cinema, TV e artes com presença LGBT+",
        color: "#FFED00",
        icon: "🎬",
    },
    CategorySeed {
        name: "Direitos e Legislação",
        description: "Leis, decisões e direitos conquistados pela comunidade",
        color: "#008026",
        icon: "⚖️",
    },
    CategorySeed {
        name: "Personalidades",
        description: "Figuras marcantes da comunidade LGBT+",
        color: "#004DFF",
        icon: "⭐",
    },
];

/// The default admin account, created only when the users table is empty.
pub struct AdminSeed {
    pub email: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub status: &'static str,
}

pub const DEFAULT_ADMIN: AdminSeed = AdminSeed {
    email: "admin@quizhive.app",
    name: "Administrador",
    role: "admin",
    status: "active",
};

/// Plaintext for the seeded admin account. Passed to the injected hasher
/// and nowhere else: never persisted, never logged.
pub const DEFAULT_ADMIN_SECRET: &str = "colmeia-mestra";

/// Default per-level reward curve, `(level, honey_value)`.
pub const DEFAULT_HONEY_CURVE: [(i64, i64); 10] = [
    (1, 5),
    (2, 10),
    (3, 15),
    (4, 20),
    (5, 25),
    (6, 35),
    (7, 75),
    (8, 125),
    (9, 250),
    (10, 500),
];
