//! Built-in domain table.

use super::models::Domain;

/// Catch-all domain used when none is requested or the key is unknown.
pub const DEFAULT_DOMAIN: &str = "general_knowledge";

pub const DOMAINS: &[Domain] = &[
    Domain {
        key: "mathematics",
        description: "Study of numbers, structures, patterns, and logical reasoning.",
        fields: &[
            "algebra",
            "geometry",
            "calculus",
            "statistics",
            "probability",
            "number_theory",
            "logic",
            "topology",
            "discrete_math",
            "analysis",
        ],
        applications: &[
            "data_analysis",
            "cryptography",
            "finance",
            "computer_science",
            "engineering",
        ],
    },
    Domain {
        key: "physics",
        description: "Study of matter, energy, forces, and the laws of nature.",
        fields: &[
            "mechanics",
            "quantum_physics",
            "thermodynamics",
            "optics",
            "astrophysics",
            "nuclear_physics",
            "particle_physics",
            "relativity",
            "condensed_matter",
        ],
        applications: &["aerospace", "electronics", "energy", "materials_science"],
    },
    Domain {
        key: "chemistry",
        description: "Study of substances, their properties, reactions, and transformations.",
        fields: &[
            "organic_chemistry",
            "inorganic_chemistry",
            "physical_chemistry",
            "biochemistry",
            "analytical_chemistry",
            "theoretical_chemistry",
        ],
        applications: &["pharma", "materials", "food_science", "biotechnology"],
    },
    Domain {
        key: "biology",
        description: "Science of life, living organisms, and ecosystems.",
        fields: &[
            "molecular_biology",
            "cell_biology",
            "genetics",
            "evolution",
            "zoology",
            "botany",
            "microbiology",
            "ecology",
            "physiology",
            "developmental_biology",
        ],
        applications: &["medicine", "biotech", "agriculture", "environmental_science"],
    },
    Domain {
        key: "astronomy",
        description: "Study of celestial objects, space, and the universe.",
        fields: &[
            "astrophysics",
            "planetary_science",
            "cosmology",
            "observational_astronomy",
        ],
        applications: &["space_science", "satellite_technology"],
    },
    Domain {
        key: "earth_sciences",
        description: "Study of Earth, its structure, processes, and environments.",
        fields: &[
            "geology",
            "geography",
            "meteorology",
            "oceanography",
            "climatology",
            "hydrology",
            "paleontology",
            "soil_science",
            "volcanology",
            "seismology",
        ],
        applications: &["mining", "oil_and_gas", "environmental_policy", "urban_planning"],
    },
    Domain {
        key: "computer_science",
        description: "Theoretical and practical study of computation, software, and information systems.",
        fields: &[
            "algorithms",
            "data_structures",
            "software_engineering",
            "machine_learning",
            "artificial_intelligence",
            "data_science",
            "theoretical_cs",
            "cybersecurity",
            "networks",
            "operating_systems",
            "databases",
            "programming_languages",
        ],
        applications: &[
            "software_development",
            "web",
            "cloud",
            "mobile",
            "robotics",
            "automation",
        ],
    },
    Domain {
        key: "engineering",
        description: "Application of science and math to solve real-world problems.",
        fields: &[
            "mechanical_engineering",
            "electrical_engineering",
            "civil_engineering",
            "chemical_engineering",
            "aerospace_engineering",
            "biomedical_engineering",
            "systems_engineering",
            "materials_engineering",
            "environmental_engineering",
            "nuclear_engineering",
            "industrial_engineering",
            "petroleum_engineering",
            "automotive_engineering",
        ],
        applications: &[
            "product_design",
            "manufacturing",
            "infrastructure",
            "energy",
            "transport",
        ],
    },
    Domain {
        key: "artificial_intelligence",
        description: "Study and creation of intelligent systems and agents.",
        fields: &[
            "machine_learning",
            "deep_learning",
            "natural_language_processing",
            "computer_vision",
            "robotics",
            "multi-agent_systems",
            "explainable_ai",
            "ai_alignment",
        ],
        applications: &[
            "automation",
            "analytics",
            "personal_assistants",
            "autonomous_vehicles",
        ],
    },
    Domain {
        key: "robotics",
        description: "Design, construction, and use of robots.",
        fields: &[
            "robot_design",
            "robot_control",
            "swarm_robots",
            "humanoid_robots",
            "industrial_robots",
            "medical_robots",
        ],
        applications: &["manufacturing", "surgery", "exploration", "service_robots"],
    },
    Domain {
        key: "nanotechnology",
        description: "Manipulation and application of matter at the nanoscale.",
        fields: &["nanomaterials", "nanoelectronics", "nanomedicine", "nanofabrication"],
        applications: &["medicine", "materials", "electronics"],
    },
    Domain {
        key: "medicine",
        description: "Science and practice of diagnosis, treatment, and prevention of disease.",
        fields: &[
            "internal_medicine",
            "surgery",
            "pediatrics",
            "psychiatry",
            "neurology",
            "oncology",
            "immunology",
            "radiology",
            "anesthesiology",
            "pathology",
            "cardiology",
            "public_health",
            "genomics",
            "pharmacology",
            "epidemiology",
            "emergency_medicine",
        ],
        applications: &[
            "clinical_practice",
            "medical_research",
            "telemedicine",
            "biotechnology",
        ],
    },
    Domain {
        key: "public_health",
        description: "Promoting and protecting the health of populations.",
        fields: &[
            "epidemiology",
            "health_policy",
            "health_education",
            "global_health",
            "biostatistics",
            "occupational_health",
        ],
        applications: &["disease_control", "health_education", "community_health"],
    },
    Domain {
        key: "psychology",
        description: "Study of mind, behavior, and mental processes.",
        fields: &[
            "clinical_psychology",
            "cognitive_psychology",
            "behavioral_psychology",
            "developmental_psychology",
            "neuropsychology",
            "social_psychology",
            "forensic_psychology",
            "organizational_psychology",
        ],
        applications: &["therapy", "counseling", "organizational_behavior"],
    },
    Domain {
        key: "biotechnology",
        description: "Use of biological systems and organisms for technological advances.",
        fields: &[
            "synthetic_biology",
            "bioinformatics",
            "genomics",
            "proteomics",
            "bioprocessing",
        ],
        applications: &["pharmaceuticals", "agriculture", "food_science"],
    },
    Domain {
        key: "veterinary_medicine",
        description: "Diagnosis, treatment, and prevention of diseases in animals.",
        fields: &[
            "companion_animals",
            "farm_animals",
            "zoological_medicine",
            "wildlife_medicine",
        ],
        applications: &["animal_health", "public_health", "animal_research"],
    },
    Domain {
        key: "economics",
        description: "Study of production, consumption, and distribution of goods and services.",
        fields: &[
            "microeconomics",
            "macroeconomics",
            "behavioral_economics",
            "development_economics",
            "financial_economics",
            "international_economics",
        ],
        applications: &["policy", "finance", "consulting"],
    },
    Domain {
        key: "law",
        description: "Systems of rules created and enforced through social institutions.",
        fields: &[
            "criminal_law",
            "civil_law",
            "international_law",
            "intellectual_property",
            "constitutional_law",
            "commercial_law",
        ],
        applications: &["legal_practice", "compliance", "policy"],
    },
    Domain {
        key: "political_science",
        description: "Study of politics, government systems, and political behavior.",
        fields: &[
            "comparative_politics",
            "political_theory",
            "public_administration",
            "international_relations",
        ],
        applications: &["governance", "diplomacy", "policy"],
    },
    Domain {
        key: "sociology",
        description: "Study of society, social relationships, and institutions.",
        fields: &[
            "urban_sociology",
            "sociology_of_family",
            "criminology",
            "education_sociology",
        ],
        applications: &["social_research", "policy", "education"],
    },
    Domain {
        key: "history",
        description: "Study of past events, cultures, and civilizations.",
        fields: &[
            "ancient_history",
            "modern_history",
            "military_history",
            "history_of_science",
            "archaeology",
        ],
        applications: &["teaching", "research", "documentary"],
    },
    Domain {
        key: "philosophy",
        description: "Study of fundamental questions about existence, values, knowledge, reason, and mind.",
        fields: &[
            "ethics",
            "epistemology",
            "metaphysics",
            "logic",
            "aesthetics",
            "philosophy_of_mind",
        ],
        applications: &["bioethics", "critical_thinking", "research"],
    },
    Domain {
        key: "linguistics",
        description: "Scientific study of language, structure, and meaning.",
        fields: &[
            "syntax",
            "semantics",
            "phonology",
            "morphology",
            "pragmatics",
            "sociolinguistics",
            "computational_linguistics",
        ],
        applications: &["translation", "NLP", "communication"],
    },
    Domain {
        key: "business",
        description: "Organization, operation, and management of enterprises.",
        fields: &[
            "finance",
            "accounting",
            "marketing",
            "management",
            "operations",
            "strategy",
            "human_resources",
            "supply_chain",
        ],
        applications: &["corporate_management", "entrepreneurship", "consulting"],
    },
    Domain {
        key: "finance",
        description: "Management of money, investments, and financial systems.",
        fields: &[
            "banking",
            "investment_management",
            "insurance",
            "quantitative_finance",
            "fintech",
        ],
        applications: &["wealth_management", "trading", "personal_finance"],
    },
    Domain {
        key: "marketing",
        description: "Promotion, selling, and distribution of products or services.",
        fields: &[
            "digital_marketing",
            "branding",
            "market_research",
            "advertising",
            "consumer_behavior",
        ],
        applications: &["sales", "campaigns", "market_analysis"],
    },
    Domain {
        key: "supply_chain",
        description: "Management of the flow of goods, services, and information.",
        fields: &[
            "logistics",
            "procurement",
            "inventory_management",
            "distribution",
            "sourcing",
        ],
        applications: &["retail", "manufacturing", "transportation"],
    },
    Domain {
        key: "human_resources",
        description: "Management of people within organizations.",
        fields: &[
            "recruitment",
            "talent_management",
            "organizational_development",
            "labor_relations",
        ],
        applications: &["employee_engagement", "training", "workplace_policy"],
    },
    Domain {
        key: "arts",
        description: "Creative expression in visual, musical, and performing arts.",
        fields: &[
            "visual_arts",
            "music",
            "theater",
            "dance",
            "film",
            "literature",
            "photography",
            "design",
        ],
        applications: &["creative_industries", "media", "education"],
    },
    Domain {
        key: "media",
        description: "Production and dissemination of information, news, and entertainment.",
        fields: &["journalism", "broadcasting", "digital_media", "publishing"],
        applications: &["content_creation", "public_relations", "news"],
    },
    Domain {
        key: "cultural_studies",
        description: "Examination of cultural practices, beliefs, and institutions.",
        fields: &[
            "anthropology",
            "folklore",
            "religious_studies",
            "gender_studies",
            "ethnic_studies",
        ],
        applications: &["social_policy", "diversity_initiatives", "museum_curation"],
    },
    Domain {
        key: "environmental_science",
        description: "Study and management of the natural environment.",
        fields: &[
            "ecology",
            "conservation",
            "climatology",
            "oceanography",
            "sustainability",
        ],
        applications: &["environmental_policy", "renewable_energy", "resource_management"],
    },
    Domain {
        key: "agriculture",
        description: "Science and practice of cultivating plants and livestock.",
        fields: &[
            "crop_science",
            "horticulture",
            "animal_husbandry",
            "agronomy",
            "agroecology",
        ],
        applications: &["food_production", "farming_technology", "agribusiness"],
    },
    Domain {
        key: "food_science",
        description: "Study of food production, processing, safety, and nutrition.",
        fields: &["nutrition", "food_technology", "food_chemistry", "sensory_analysis"],
        applications: &["food_safety", "product_development", "health"],
    },
    Domain {
        key: "personal_development",
        description: "Strategies and tools for self-improvement and well-being.",
        fields: &["self_help", "meditation", "mindfulness", "coaching", "counseling"],
        applications: &["therapy", "workshops", "self-education"],
    },
    Domain {
        key: "sports",
        description: "Physical activities, games, and athletics.",
        fields: &[
            "sports_science",
            "coaching",
            "athlete_development",
            "sports_medicine",
        ],
        applications: &["training", "team_management", "fitness"],
    },
    Domain {
        key: "parenting",
        description: "Raising and nurturing children.",
        fields: &[
            "child_development",
            "education",
            "family_counseling",
            "child_psychology",
        ],
        applications: &["parenting_advice", "early_education", "family_support"],
    },
    Domain {
        key: "travel",
        description: "Movement of people between distant locations.",
        fields: &["tourism", "hospitality", "logistics"],
        applications: &["trip_planning", "travel_advisory", "tourism_management"],
    },
    Domain {
        key: "quantum_computing",
        description: "Computational systems based on quantum mechanics.",
        fields: &["quantum_algorithms", "quantum_hardware", "quantum_cryptography"],
        applications: &["computation", "encryption", "simulation"],
    },
    Domain {
        key: "blockchain",
        description: "Distributed ledger technology and decentralized systems.",
        fields: &["cryptocurrencies", "smart_contracts", "decentralized_finance"],
        applications: &["finance", "supply_chain", "digital_identity"],
    },
    Domain {
        key: "space_science",
        description: "Study and exploration of outer space.",
        fields: &["space_exploration", "planetary_science", "astrophysics"],
        applications: &["space_missions", "satellite_tech", "astrophysics_research"],
    },
    Domain {
        key: "consciousness_studies",
        description: "Interdisciplinary study of the mind, awareness, and subjective experience.",
        fields: &[
            "philosophy_of_mind",
            "neuroscience",
            "psychology",
            "artificial_consciousness",
        ],
        applications: &["AI_research", "cognitive_science", "mindfulness"],
    },
    Domain {
        key: "interdisciplinary",
        description: "Cross-domain and integrative approaches to knowledge.",
        fields: &[
            "systems_thinking",
            "complexity_science",
            "knowledge_management",
            "policy_design",
        ],
        applications: &["innovation", "systems_engineering", "meta_research"],
    },
    Domain {
        key: "general_knowledge",
        description: "All cross-disciplinary or uncategorized knowledge.",
        fields: &[],
        applications: &["trivia", "interdisciplinary_research", "knowledge_bases"],
    },
];
