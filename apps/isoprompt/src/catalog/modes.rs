//! Built-in mode table.

use super::models::{Mode, Strictness};

/// Key of the mode used when none is requested or the key is unknown.
pub const DEFAULT_MODE: &str = "simple";

pub const MODES: &[Mode] = &[
    Mode {
        key: "simple",
        description: "Clear, direct prompts for straightforward tasks.",
        usage: "Use for basic Q&A, instructions, or simple requests.",
        capabilities: &["Directness", "Speed"],
        strictness: Strictness::Low,
        require_citations: false,
        output_formats: &["plain", "markdown"],
        industries: &["all"],
        topics: &["FAQ", "how-to", "summaries", "questions"],
    },
    Mode {
        key: "reasoning",
        description: "Step-by-step logical thinking and problem-solving.",
        usage: "Use for math, logic, or multi-step reasoning tasks.",
        capabilities: &["Logic", "Proof", "Calculation"],
        strictness: Strictness::Medium,
        require_citations: false,
        output_formats: &["list", "numbered_steps", "markdown"],
        industries: &["education", "finance", "engineering", "all"],
        topics: &["math problems", "case analysis", "root cause"],
    },
    Mode {
        key: "chain_of_thought",
        description: "Detailed, explicit reasoning steps before the answer.",
        usage: "Use for complex analysis, diagnostics, or planning.",
        capabilities: &["Structured Logic", "Transparency"],
        strictness: Strictness::High,
        require_citations: false,
        output_formats: &["numbered_steps", "blockquote", "markdown"],
        industries: &["consulting", "medicine", "software", "all"],
        topics: &["diagnosis", "strategic planning", "debugging"],
    },
    Mode {
        key: "creative",
        description: "Innovative, imaginative, and out-of-the-box thinking.",
        usage: "Use for brainstorming, ideation, or content creation.",
        capabilities: &["Creativity", "Lateral Thinking"],
        strictness: Strictness::Variable,
        require_citations: false,
        output_formats: &["plain", "story", "list", "markdown"],
        industries: &["marketing", "media", "product design", "education", "all"],
        topics: &["ad copy", "storytelling", "campaign ideas"],
    },
    Mode {
        key: "analytical",
        description: "Thorough analysis and detailed examination.",
        usage: "Use for reports, audits, or in-depth reviews.",
        capabilities: &["Analysis", "Breakdown", "Structured Review"],
        strictness: Strictness::High,
        require_citations: true,
        output_formats: &["report", "table", "list", "markdown"],
        industries: &[
            "finance",
            "research",
            "operations",
            "mathematics",
            "computer science",
            "business",
            "strategy",
            "product management",
            "law",
            "science",
            "engineering",
            "all",
        ],
        topics: &[
            "financial analysis",
            "market research",
            "process review",
            "scientific analysis",
        ],
    },
    Mode {
        key: "instructional",
        description: "Step-by-step guides and teaching content.",
        usage: "Use for tutorials, onboarding, or training.",
        capabilities: &["Teaching", "Process Decomposition"],
        strictness: Strictness::Medium,
        require_citations: false,
        output_formats: &["step_list", "numbered_steps", "markdown"],
        industries: &["education", "HR", "customer support", "technology", "all"],
        topics: &["tutorials", "onboarding", "user guides"],
    },
    Mode {
        key: "conversational",
        description: "Natural, human-like dialogue and chat.",
        usage: "Use for chatbots, customer service, or interactive agents.",
        capabilities: &["Dialogue", "Context Retention"],
        strictness: Strictness::Low,
        require_citations: false,
        output_formats: &["chat", "plain", "markdown"],
        industries: &["customer support", "retail", "healthcare", "education", "all"],
        topics: &["chatbots", "virtual assistants", "FAQ bots"],
    },
    Mode {
        key: "persuasive",
        description: "Prompts designed to convince or influence.",
        usage: "Use for sales, negotiation, or marketing copy.",
        capabilities: &["Rhetoric", "Sales", "Influence"],
        strictness: Strictness::Variable,
        require_citations: false,
        output_formats: &["plain", "ad_copy", "pitch", "markdown"],
        industries: &["sales", "marketing", "politics", "business", "all"],
        topics: &["sales pitches", "ad copy", "negotiation"],
    },
    Mode {
        key: "summarization",
        description: "Condense information into concise summaries.",
        usage: "Use for executive summaries, abstracts, or TL;DRs.",
        capabilities: &["Abstraction", "Compression", "Synthesis"],
        strictness: Strictness::Medium,
        require_citations: true,
        output_formats: &["summary", "table", "markdown", "bullet_list"],
        industries: &["media", "research", "business", "all"],
        topics: &["news summaries", "meeting notes", "research abstracts"],
    },
    Mode {
        key: "critical_review",
        description: "Critical analysis and constructive feedback.",
        usage: "Use for peer review, code review, or editorial feedback.",
        capabilities: &["Critical Thinking", "Evaluation"],
        strictness: Strictness::High,
        require_citations: true,
        output_formats: &["review_report", "inline_comments", "markdown"],
        industries: &["software", "publishing", "academia", "science", "engineering", "all"],
        topics: &["code review", "manuscript review", "product feedback"],
    },
    Mode {
        key: "socratic",
        description: "Rigorous, question-driven exploration and adversarial thinking.",
        usage: "Expose flaws, challenge assumptions, improve robustness.",
        capabilities: &["Adversarial", "Philosophical", "Assumption Testing"],
        strictness: Strictness::VeryHigh,
        require_citations: true,
        output_formats: &["dialogue", "qa", "markdown"],
        industries: &["research", "academia", "policy", "science", "philosophy", "all"],
        topics: &["bias detection", "robustness", "debate", "risk analysis"],
    },
    Mode {
        key: "comparative",
        description: "Systematic comparison of alternatives with clear criteria.",
        usage: "Technology, literature, product, policy comparisons.",
        capabilities: &["Contrast", "Decision Making"],
        strictness: Strictness::High,
        require_citations: true,
        output_formats: &["table", "pros_cons", "list", "markdown"],
        industries: &["consulting", "research", "engineering", "product", "all"],
        topics: &["literature reviews", "tech comparisons", "decision matrix"],
    },
    Mode {
        key: "synthesis",
        description: "Combine multiple sources or perspectives into unified insight.",
        usage: "Meta-research, consensus building, integrated reviews.",
        capabilities: &["Integration", "Big Picture", "Synthesis"],
        strictness: Strictness::VeryHigh,
        require_citations: true,
        output_formats: &["integrated_report", "summary", "table", "markdown"],
        industries: &["research", "product", "science", "strategy", "academia", "all"],
        topics: &["meta-analysis", "state-of-the-art reports", "consensus finding"],
    },
    Mode {
        key: "critical_appraisal",
        description: "Formal evaluation of evidence using scientific frameworks (e.g., GRADE, PRISMA, CASP).",
        usage: "Systematic reviews, risk assessments, scientific critique.",
        capabilities: &["Evidence Evaluation", "Reliability Assessment"],
        strictness: Strictness::VeryHigh,
        require_citations: true,
        output_formats: &["appraisal_table", "formal_report", "markdown"],
        industries: &["medicine", "academia", "policy", "science", "all"],
        topics: &["systematic review", "evidence appraisal", "quality scoring"],
    },
    Mode {
        key: "data_extraction",
        description: "Extract facts, statistics, and entities from complex text or data.",
        usage: "Knowledge base building, entity extraction, data curation.",
        capabilities: &["Fact Extraction", "Entity Mining", "Knowledge Graph Creation"],
        strictness: Strictness::VeryHigh,
        require_citations: true,
        output_formats: &["table", "csv", "json", "markdown"],
        industries: &["data science", "ml", "legal", "research", "academia", "all"],
        topics: &["entity extraction", "statistical extraction", "literature mining"],
    },
    Mode {
        key: "meta_analysis",
        description: "Aggregate and statistically analyze results from multiple sources or studies.",
        usage: "Scientific synthesis, medical trials, evidence integration.",
        capabilities: &["Aggregation", "Statistical Synthesis"],
        strictness: Strictness::VeryHigh,
        require_citations: true,
        output_formats: &["statistical_report", "table", "summary", "markdown"],
        industries: &["medicine", "science", "social science", "market research", "all"],
        topics: &["meta-analysis", "study aggregation", "evidence synthesis"],
    },
    Mode {
        key: "risk_analysis",
        description: "Identify, articulate, and evaluate risks, uncertainties, and assumptions.",
        usage: "Proposals, technical plans, research, strategy.",
        capabilities: &["Risk Scanning", "Scenario Analysis"],
        strictness: Strictness::High,
        require_citations: true,
        output_formats: &["risk_table", "list", "markdown"],
        industries: &["engineering", "finance", "policy", "R&D", "science", "all"],
        topics: &["risk assessment", "assumption mapping", "uncertainty quantification"],
    },
    Mode {
        key: "method_design",
        description: "Design and critique research methods, study designs, and protocols.",
        usage: "Research planning, experimental protocol development, grant writing.",
        capabilities: &["Design", "Protocol", "Framework Evaluation"],
        strictness: Strictness::VeryHigh,
        require_citations: true,
        output_formats: &["protocol_doc", "table", "markdown"],
        industries: &["academia", "R&D", "clinical trials", "science", "all"],
        topics: &["study design", "experimental protocols", "methodology review"],
    },
    Mode {
        key: "hypothesis_generation",
        description: "Generate, evaluate, and refine hypotheses or ideas for research and innovation.",
        usage: "Scientific brainstorming, product R&D, invention.",
        capabilities: &["Ideation", "Hypothesis Framing"],
        strictness: Strictness::Medium,
        require_citations: false,
        output_formats: &["list", "table", "markdown"],
        industries: &["research", "science", "product", "startups", "all"],
        topics: &["hypothesis", "ideation", "discovery"],
    },
    Mode {
        key: "provenance_tracking",
        description: "Track sources, confidence levels, and attributions for all facts and outputs.",
        usage: "Research traceability, scientific rigor, regulatory compliance.",
        capabilities: &["Traceability", "Source Attribution"],
        strictness: Strictness::VeryHigh,
        require_citations: true,
        output_formats: &["annotated", "citation_list", "json", "markdown"],
        industries: &["research", "law", "compliance", "science", "all"],
        topics: &["source tracking", "evidence confidence", "regulatory evidence"],
    },
    Mode {
        key: "reproducibility_check",
        description: "Assess whether outputs are reproducible, verifiable, and based on transparent reasoning.",
        usage: "Meta-research, peer review, quality assurance.",
        capabilities: &["Reproducibility", "Verification"],
        strictness: Strictness::VeryHigh,
        require_citations: true,
        output_formats: &["reproducibility_report", "table", "markdown"],
        industries: &["academia", "science", "software", "all"],
        topics: &["reproducibility", "verification", "replication"],
    },
    Mode {
        key: "bias_audit",
        description: "Surface and analyze potential sources of bias and hidden assumptions in data, models, or outputs.",
        usage: "Bias detection, audit reports, trustworthiness analysis.",
        capabilities: &["Bias Detection", "Assumption Mapping"],
        strictness: Strictness::VeryHigh,
        require_citations: true,
        output_formats: &["bias_report", "list", "markdown"],
        industries: &["research", "policy", "ethics", "science", "all"],
        topics: &["bias", "audit", "assumption surfacing"],
    },
    Mode {
        key: "self_critique",
        description: "Automatically critiques and grades its own output for accuracy, completeness, and bias.",
        usage: "Trustworthy superintelligent self-improvement and error catching.",
        capabilities: &["Self-Evaluation", "Meta-Reasoning"],
        strictness: Strictness::Ultra,
        require_citations: true,
        output_formats: &["review_report", "score", "list", "markdown"],
        industries: &["all"],
        topics: &["output critique", "self-reflection", "model audit"],
    },
    Mode {
        key: "redundancy_verification",
        description: "Requires multiple independent output generations to converge before returning an answer (ensemble/consensus mode).",
        usage: "Safety-critical, ensemble-verified outputs.",
        capabilities: &["Redundancy", "Safety", "Consensus"],
        strictness: Strictness::Ultra,
        require_citations: true,
        output_formats: &["consensus_report", "table", "markdown"],
        industries: &["critical infrastructure", "science", "safety", "compliance", "all"],
        topics: &["redundancy", "verification", "ensemble methods"],
    },
    Mode {
        key: "confidence_quantification",
        description: "Quantifies the model's confidence and uncertainty for every major claim or answer.",
        usage: "Decision support, research, high-stakes automation.",
        capabilities: &["Uncertainty Quantification", "Probability"],
        strictness: Strictness::VeryHigh,
        require_citations: true,
        output_formats: &["table", "json", "markdown"],
        industries: &["research", "science", "medicine", "governance", "all"],
        topics: &["confidence", "uncertainty", "probability estimation"],
    },
];
