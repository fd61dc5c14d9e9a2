//! Built-in site map and content catalog

use super::content::{ContentItem, ContentType};
use super::site_map::Section;

pub fn site_map() -> Vec<Section> {
    vec![
        Section::new("home", "Home", "/").children(&[
            "skills",
            "live-data",
            "industries",
            "programs",
            "contests",
            "trending",
            "crypto",
            "trading",
            "bugbash",
        ]),
        // Top level
        Section::new("skills", "Prompt Engineering Skills", "/skills")
            .children(&[
                "reasoning",
                "data-analysis",
                "creative-writing",
                "coding",
                "summarization",
                "personalization",
            ])
            .related(&["live-data", "programs"]),
        Section::new("live-data", "Real-Time Data", "/live-data")
            .children(&["reddit-data", "twitter-data", "github-data", "huggingface-data"])
            .related(&["trending", "skills"]),
        Section::new("industries", "Industry Applications", "/industries")
            .children(&[
                "healthcare",
                "finance",
                "legal",
                "education",
                "marketing",
                "research",
            ])
            .related(&["skills", "programs"]),
        Section::new("programs", "Learning Programs", "/programs")
            .children(&["beginner", "intermediate", "advanced", "certification"])
            .related(&["skills", "industries"]),
        Section::new("contests", "Prompt Engineering Contests", "/contests")
            .children(&["active", "upcoming", "past", "leaderboard"])
            .related(&["bugbash", "trending"]),
        Section::new("trending", "Trending Techniques", "/trending")
            .children(&["daily", "weekly", "monthly"])
            .related(&["live-data", "skills"]),
        Section::new("crypto", "Crypto Prompt Engineering", "/crypto")
            .children(&["analysis", "trading", "fundamentals"])
            .related(&["trading", "skills"]),
        Section::new("trading", "Trading Strategies", "/trading")
            .children(&["technical", "sentiment", "fundamental"])
            .related(&["crypto", "skills"]),
        Section::new("bugbash", "Bug Bash Challenges", "/bugbash")
            .children(&["current", "submissions", "rewards"])
            .related(&["contests"]),
        // Skills
        Section::new("reasoning", "Reasoning & Logic", "/skills/reasoning")
            .parent("skills")
            .children(&["chain-of-thought", "tree-of-thought", "react", "socratic", "icl"])
            .related(&["data-analysis", "coding"]),
        Section::new("data-analysis", "Data Analysis", "/skills/data-analysis")
            .parent("skills")
            .children(&[
                "data-formatting",
                "exploratory-analysis",
                "data-cleaning",
                "insight-generation",
                "visualization",
            ])
            .related(&["reasoning", "coding"]),
        Section::new("creative-writing", "Creative Writing", "/skills/creative-writing")
            .parent("skills")
            .children(&["storytelling", "character-development", "plot-structure", "dialogue"])
            .related(&["personalization", "summarization"]),
        Section::new("coding", "Code Generation", "/skills/coding")
            .parent("skills")
            .children(&["python", "javascript", "sql", "algorithms", "debugging"])
            .related(&["reasoning", "data-analysis"]),
        Section::new("summarization", "Summarization Techniques", "/skills/summarization")
            .parent("skills")
            .children(&["extractive", "abstractive", "length-control", "focus-control"])
            .related(&["creative-writing", "personalization"]),
        Section::new("personalization", "Personalization", "/skills/personalization")
            .parent("skills")
            .children(&["tone-adjustment", "complexity-control", "audience-adaptation"])
            .related(&["creative-writing", "summarization"]),
        // Live data
        Section::new("reddit-data", "Reddit Discussions", "/live-data/reddit")
            .parent("live-data")
            .related(&["twitter-data", "trending"]),
        Section::new("twitter-data", "Twitter Insights", "/live-data/twitter")
            .parent("live-data")
            .related(&["reddit-data", "trending"]),
        Section::new("github-data", "GitHub Projects", "/live-data/github")
            .parent("live-data")
            .related(&["huggingface-data", "coding"]),
        Section::new("huggingface-data", "HuggingFace Models", "/live-data/huggingface")
            .parent("live-data")
            .related(&["github-data", "trending"]),
        // Reasoning techniques
        Section::new(
            "chain-of-thought",
            "Chain-of-Thought Prompting",
            "/skills/reasoning/chain-of-thought",
        )
        .parent("reasoning")
        .related(&["tree-of-thought", "react", "socratic"]),
        Section::new(
            "tree-of-thought",
            "Tree-of-Thought Prompting",
            "/skills/reasoning/tree-of-thought",
        )
        .parent("reasoning")
        .related(&["chain-of-thought", "react"]),
        Section::new("react", "ReAct Framework", "/skills/reasoning/react")
            .parent("reasoning")
            .related(&["chain-of-thought", "tree-of-thought"]),
        Section::new("socratic", "Socratic Method", "/skills/reasoning/socratic")
            .parent("reasoning")
            .related(&["chain-of-thought", "icl"]),
        Section::new("icl", "In-Context Learning", "/skills/reasoning/icl")
            .parent("reasoning")
            .related(&["chain-of-thought", "socratic"]),
        // Industries
        Section::new("healthcare", "Healthcare", "/industries/healthcare")
            .parent("industries")
            .related(&["research", "education"]),
        Section::new("finance", "Finance", "/industries/finance")
            .parent("industries")
            .related(&["trading", "crypto"]),
        Section::new("legal", "Legal", "/industries/legal")
            .parent("industries")
            .related(&["research", "summarization"]),
        Section::new("education", "Education", "/industries/education")
            .parent("industries")
            .related(&["creative-writing", "personalization"]),
        Section::new("marketing", "Marketing", "/industries/marketing")
            .parent("industries")
            .related(&["creative-writing", "personalization"]),
        Section::new("research", "Research", "/industries/research")
            .parent("industries")
            .related(&["data-analysis", "summarization"]),
    ]
}

pub fn content() -> Vec<ContentItem> {
    use ContentType::*;

    vec![
        // Reasoning
        ContentItem::new("chain-of-thought-guide", Tutorial, "chain-of-thought")
            .related("tree-of-thought-comparison", 0.95)
            .related("reasoning-benchmark-results", 0.9)
            .related("cot-reddit-discussion", 0.85)
            .related("step-by-step-prompt-template", 0.8),
        ContentItem::new("tree-of-thought-comparison", Comparison, "tree-of-thought")
            .related("chain-of-thought-guide", 0.95)
            .related("reasoning-benchmark-results", 0.9)
            .related("tot-implementation-code", 0.85),
        ContentItem::new("reasoning-benchmark-results", Research, "reasoning")
            .related("chain-of-thought-guide", 0.9)
            .related("tree-of-thought-comparison", 0.9)
            .related("react-framework-tutorial", 0.8),
        ContentItem::new("react-framework-tutorial", Tutorial, "react")
            .related("chain-of-thought-guide", 0.85)
            .related("tree-of-thought-comparison", 0.85)
            .related("reasoning-benchmark-results", 0.8)
            .related("tot-implementation-code", 0.75),
        ContentItem::new("tot-implementation-code", Code, "tree-of-thought")
            .related("tree-of-thought-comparison", 0.95)
            .related("react-framework-tutorial", 0.8)
            .related("github-prompt-patterns-repo", 0.75),
        ContentItem::new("step-by-step-prompt-template", Template, "chain-of-thought")
            .related("chain-of-thought-guide", 0.9)
            .related("cot-reddit-discussion", 0.8)
            .related("exploratory-data-prompt-guide", 0.7),
        // Data analysis
        ContentItem::new("exploratory-data-prompt-guide", Tutorial, "data-analysis")
            .related("data-formatting-templates", 0.9)
            .related("visualization-prompt-techniques", 0.85)
            .related("github-data-analysis-repo", 0.8),
        ContentItem::new("data-formatting-templates", Template, "data-formatting")
            .related("exploratory-data-prompt-guide", 0.9)
            .related("visualization-prompt-techniques", 0.8)
            .related("data-cleaning-techniques", 0.85),
        ContentItem::new("visualization-prompt-techniques", Tutorial, "visualization")
            .related("exploratory-data-prompt-guide", 0.85)
            .related("data-formatting-templates", 0.8)
            .related("github-data-analysis-repo", 0.75),
        ContentItem::new("data-cleaning-techniques", Tutorial, "data-cleaning")
            .related("data-formatting-templates", 0.85)
            .related("exploratory-data-prompt-guide", 0.8)
            .related("step-by-step-prompt-template", 0.7),
        // Live data
        ContentItem::new("cot-reddit-discussion", Reddit, "reddit-data")
            .related("chain-of-thought-guide", 0.85)
            .related("prompt-engineer-twitter-thread", 0.75)
            .related("reasoning-benchmark-results", 0.7),
        ContentItem::new("prompt-engineer-twitter-thread", Twitter, "twitter-data")
            .related("github-prompt-patterns-repo", 0.8)
            .related("cot-reddit-discussion", 0.75),
        ContentItem::new("github-prompt-patterns-repo", Github, "github-data")
            .related("prompt-engineer-twitter-thread", 0.8)
            .related("prompt-tuning-toolkit-model", 0.85)
            .related("tot-implementation-code", 0.7),
        ContentItem::new("prompt-tuning-toolkit-model", Huggingface, "huggingface-data")
            .related("github-prompt-patterns-repo", 0.85)
            .related("llama-model-card", 0.75),
        ContentItem::new("llama-model-card", Huggingface, "huggingface-data")
            .related("prompt-tuning-toolkit-model", 0.75)
            .related("github-prompt-patterns-repo", 0.7)
            .related("github-data-analysis-repo", 0.65),
        ContentItem::new("github-data-analysis-repo", Github, "github-data")
            .related("visualization-prompt-techniques", 0.8)
            .related("exploratory-data-prompt-guide", 0.75)
            .related("llama-model-card", 0.65),
    ]
}

/// Popular item ids with their popularity, most popular first
pub fn popular() -> Vec<(String, u32)> {
    [
        ("chain-of-thought-guide", 95),
        ("tree-of-thought-comparison", 85),
        ("cot-reddit-discussion", 80),
        ("github-prompt-patterns-repo", 75),
        ("exploratory-data-prompt-guide", 70),
    ]
    .into_iter()
    .map(|(id, popularity)| (id.to_string(), popularity))
    .collect()
}
