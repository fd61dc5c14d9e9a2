//! Fixed fallback records
//!
//! Served whenever a platform cannot be reached or has no credentials.
//! Timestamps are relative to the moment the fallback is produced.

use chrono::{DateTime, Duration, Utc};

use super::models::{GithubRepo, HuggingfaceModel, RedditPost, Tweet};

fn hours_ago(now: DateTime<Utc>, hours: i64) -> DateTime<Utc> {
    now - Duration::hours(hours)
}

fn days_ago(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

/// Sample subreddit posts, truncated to `limit`
pub fn reddit_posts(now: DateTime<Utc>, limit: usize) -> Vec<RedditPost> {
    let post = |id: &str,
                title: &str,
                subreddit: &str,
                author: &str,
                score: i64,
                num_comments: u64,
                age_hours: i64,
                selftext: &str| RedditPost {
        id: id.to_string(),
        title: title.to_string(),
        subreddit: subreddit.to_string(),
        author: author.to_string(),
        score,
        num_comments,
        created: hours_ago(now, age_hours),
        url: None,
        selftext: selftext.to_string(),
    };

    let mut posts = vec![
        post(
            "rd1",
            "How to use chain-of-thought with GPT-4 Turbo",
            "PromptEngineering",
            "prompt_master",
            524,
            78,
            12,
            "I've been experimenting with chain-of-thought prompting in GPT-4 Turbo and found some interesting patterns. The key is to explicitly ask the model to think step by step before giving its final answer.",
        ),
        post(
            "rd2",
            "I built a tool that automatically generates semantic search prompts",
            "MachineLearning",
            "ai_dev42",
            412,
            53,
            15,
            "After months of fine-tuning, I've created a system that can generate optimal embedding prompts for semantic search. In our benchmarks it improved accuracy by 18% compared to standard prompts.",
        ),
        post(
            "rd3",
            "Prompt template library for specialized medical queries",
            "artificial",
            "health_ai_researcher",
            367,
            42,
            24,
            "I've compiled a library of 50+ prompt templates designed for medical research and diagnostic assistance, each validated by healthcare professionals.",
        ),
        post(
            "rd4",
            "The effectiveness of Tree-of-Thought vs Chain-of-Thought",
            "LocalLLaMA",
            "reasoning_researcher",
            289,
            34,
            10,
            "I ran a benchmark comparing Tree-of-Thought versus Chain-of-Thought prompting across several open-source models. ToT costs about 3x the tokens but wins on complex problems.",
        ),
        post(
            "rd5",
            "Persona-based prompting improved my creative writing results",
            "PromptEngineering",
            "novel_writer",
            311,
            47,
            18,
            "By explicitly defining the character of the AI, its style and sample passages, the writing keeps a consistent voice throughout.",
        ),
    ];
    posts.truncate(limit);
    posts
}

/// Sample tweets, truncated to `limit`
pub fn tweets(now: DateTime<Utc>, limit: usize) -> Vec<Tweet> {
    let tweet = |id: &str,
                 content: &str,
                 handle: &str,
                 display_name: &str,
                 likes: u64,
                 retweets: u64,
                 age_hours: i64| Tweet {
        id: id.to_string(),
        content: content.to_string(),
        username: format!("@{}", handle),
        display_name: display_name.to_string(),
        likes,
        retweets,
        created: hours_ago(now, age_hours),
        url: format!("https://twitter.com/{}/status/1", handle),
    };

    let mut tweets = vec![
        tweet(
            "tw1",
            "Just published my research on using multi-shot prompting for cross-lingual knowledge transfer. Results show 43% improvement over zero-shot baselines across 12 languages. #PromptEngineering #NLP",
            "ai_researcher",
            "Dr. Sarah Chen | AI Research",
            284,
            92,
            8,
        ),
        tweet(
            "tw2",
            "The secret to good prompting isn't complexity, it's clarity. Simple, direct prompts that define the task, context, and output format win. #LLM #GPT4",
            "prompt_engineer",
            "Mark Johnson",
            342,
            118,
            5,
        ),
        tweet(
            "tw3",
            "1/5 Let's talk about the ReAct framework and how it's changing agent design. ReAct interleaves reasoning and action, enabling planning and tool use.",
            "llm_agents",
            "Alex | Building AI Agents",
            512,
            203,
            11,
        ),
        tweet(
            "tw4",
            "New blog post: 'Advanced Prompt Engineering Patterns for Claude 3' covering structured XML outputs, multi-persona debates, and knowledge elicitation.",
            "claude_expert",
            "Claude Techniques",
            276,
            87,
            14,
        ),
        tweet(
            "tw5",
            "We're seeing a 35% reduction in hallucinations with a prompt prefix that enforces citations and explicit uncertainty marking. #PromptEngineering",
            "ai_safety_lab",
            "AI Safety Research Lab",
            428,
            156,
            10,
        ),
    ];
    tweets.truncate(limit);
    tweets
}

/// Sample repositories, truncated to `limit`
pub fn github_repos(now: DateTime<Utc>, limit: usize) -> Vec<GithubRepo> {
    let repo = |id: &str,
                name: &str,
                author: &str,
                stars: u64,
                forks: u64,
                description: &str,
                age_days: i64,
                language: &str,
                issues: u64| GithubRepo {
        id: id.to_string(),
        repo: name.to_string(),
        author: author.to_string(),
        stars,
        forks,
        description: description.to_string(),
        updated: days_ago(now, age_days),
        url: format!("https://github.com/{}/{}", author, name),
        language: Some(language.to_string()),
        issues,
    };

    let mut repos = vec![
        repo(
            "gh1",
            "prompt-engineering-guide",
            "dair-ai",
            35420,
            3180,
            "A comprehensive guide on prompt engineering for large language models, including techniques, examples and resources.",
            3,
            "Python",
            42,
        ),
        repo(
            "gh2",
            "langchain",
            "langchain-ai",
            72450,
            10780,
            "Building applications with LLMs through composability",
            1,
            "Python",
            156,
        ),
        repo(
            "gh3",
            "react-patterns",
            "kevinzg",
            8320,
            1240,
            "Implementation of the ReAct (Reasoning + Acting) framework for LLM agents with examples and best practices",
            5,
            "TypeScript",
            28,
        ),
        repo(
            "gh4",
            "awesome-prompt-engineering",
            "promptslab",
            21340,
            2150,
            "A curated list of awesome prompt engineering tools, papers, tutorials, and resources",
            2,
            "Markdown",
            15,
        ),
        repo(
            "gh5",
            "tree-of-thought-llm",
            "kyegomez",
            5830,
            780,
            "Implementation of Tree of Thought (ToT) prompting for enhanced problem-solving in LLMs",
            7,
            "Python",
            23,
        ),
    ];
    repos.truncate(limit);
    repos
}

/// Sample models, truncated to `limit`
pub fn huggingface_models(now: DateTime<Utc>, limit: usize) -> Vec<HuggingfaceModel> {
    let model = |id: &str,
                 name: &str,
                 author: &str,
                 downloads: u64,
                 description: &str,
                 age_days: i64,
                 url: &str,
                 tags: &[&str]| HuggingfaceModel {
        id: id.to_string(),
        model: name.to_string(),
        author: author.to_string(),
        downloads,
        description: description.to_string(),
        updated: Some(days_ago(now, age_days)),
        url: url.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    };

    let mut models = vec![
        model(
            "hf1",
            "prompt-tuning-toolkit",
            "promptengineering",
            12450,
            "A comprehensive toolkit for prompt tuning with various LLMs",
            10,
            "https://huggingface.co/promptengineering/prompt-tuning-toolkit",
            &["prompt-tuning", "llm", "optimization"],
        ),
        model(
            "hf2",
            "react-prompting-model",
            "ai-research",
            9875,
            "Implementation of ReAct framework for enhanced reasoning capabilities",
            15,
            "https://huggingface.co/ai-research/react-prompting-model",
            &["react", "reasoning", "llm"],
        ),
        model(
            "hf3",
            "chain-of-thought-llama",
            "llama-labs",
            8732,
            "Fine-tuned Llama model for chain-of-thought prompting",
            20,
            "https://huggingface.co/llama-labs/chain-of-thought-llama",
            &["chain-of-thought", "llama", "reasoning"],
        ),
        model(
            "hf4",
            "prompt-engineering-dataset",
            "openai-community",
            15280,
            "Large dataset of optimized prompts for various tasks and domains",
            5,
            "https://huggingface.co/datasets/openai-community/prompt-engineering-dataset",
            &["dataset", "prompt-engineering", "examples"],
        ),
        model(
            "hf5",
            "medical-prompt-tuning",
            "healthcare-ai",
            7340,
            "Specialized prompt tuning models for healthcare and medical applications",
            12,
            "https://huggingface.co/healthcare-ai/medical-prompt-tuning",
            &["healthcare", "medical", "prompt-tuning"],
        ),
    ];
    models.truncate(limit);
    models
}
