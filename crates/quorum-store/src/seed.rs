//! The demo dataset every fresh session starts from. Content mirrors
//! the reference board: three decisions with votes, discussions and
//! pre-generated insights, plus the five participants behind them.

use chrono::{DateTime, TimeZone, Utc};

use quorum_core::id::{DecisionId, DiscussionId, InsightId, UserId, VoteId};
use quorum_core::model::{
    Category, Decision, DecisionStatus, Discussion, DiscussionKind, Insight, Sentiment, User,
    Vote, VoteOption,
};

/// The five demo participants. Only their ids matter to the board; the
/// rest is display dressing.
pub fn demo_users() -> Vec<User> {
    [
        ("1", "Alex Johnson", "alex@example.com"),
        ("2", "Sarah Chen", "sarah@example.com"),
        ("3", "Mike Rodriguez", "mike@example.com"),
        ("4", "Emma Wilson", "emma@example.com"),
        ("5", "David Kim", "david@example.com"),
    ]
    .into_iter()
    .map(|(id, name, email)| User {
        id: UserId::from(id),
        email: email.to_string(),
        name: name.to_string(),
        avatar: None,
        joined_at: date(2024, 1, 1),
    })
    .collect()
}

/// The three reference decisions, in board order (oldest last is not the
/// rule here; the reference lists them 1, 2, 3 and new ones are
/// prepended in front).
pub fn demo_decisions() -> Vec<Decision> {
    vec![career_decision(), business_decision(), finance_decision()]
}

fn career_decision() -> Decision {
    Decision {
        id: DecisionId::from("1"),
        title: "Should I start a tech startup or join a big company?".into(),
        description: "I'm a software engineer with 5 years of experience. I have a great \
                      startup idea but also received an offer from Google. The startup could \
                      be huge but risky, while Google offers stability and great benefits."
            .into(),
        category: Category::Career,
        created_by: UserId::from("1"),
        created_at: date(2024, 1, 15),
        deadline: Some(date(2024, 2, 15)),
        status: DecisionStatus::Active,
        votes: vec![
            vote(
                "1",
                "2",
                "1",
                VoteOption::Yes,
                "Startups offer more learning and growth potential",
                8,
                date(2024, 1, 16),
            ),
            vote(
                "2",
                "3",
                "1",
                VoteOption::No,
                "Google provides stability and world-class resources",
                7,
                date(2024, 1, 17),
            ),
            vote(
                "3",
                "4",
                "1",
                VoteOption::Maybe,
                "Depends on your risk tolerance and financial situation",
                6,
                date(2024, 1, 18),
            ),
        ],
        discussions: vec![
            discussion(
                "1",
                "1",
                "2",
                "The startup route offers unlimited potential but comes with high risk. \
                 Consider your financial situation and risk tolerance.",
                DiscussionKind::Pro,
                date(2024, 1, 16),
                12,
            ),
            discussion(
                "2",
                "1",
                "3",
                "Google will provide incredible learning opportunities, world-class \
                 colleagues, and financial stability. You can always start a company later.",
                DiscussionKind::Con,
                date(2024, 1, 17),
                8,
            ),
        ],
        insight: Some(Insight {
            id: InsightId::from("1"),
            decision_id: DecisionId::from("1"),
            summary: "This is a classic career decision between security and potential high \
                      reward. The community is split but leaning towards the startup option."
                .into(),
            pros: strs(&[
                "Higher potential for financial return and equity",
                "More learning opportunities and diverse responsibilities",
                "Greater autonomy and decision-making power",
                "Potential to build something impactful from the ground up",
            ]),
            cons: strs(&[
                "Higher risk of failure and financial instability",
                "Less structured environment and resources",
                "Longer working hours and higher stress",
                "Uncertain career progression",
            ]),
            sentiment: Sentiment::Neutral,
            confidence: 0.75,
            recommendations: strs(&[
                "Consider your current financial obligations and runway",
                "Evaluate the startup team and market opportunity",
                "Negotiate with Google for a delayed start date",
                "Seek mentorship from entrepreneurs and Google employees",
            ]),
            generated_at: date(2024, 1, 20),
        }),
        tags: strs(&["career", "startup", "big-tech", "risk-assessment"]),
    }
}

fn business_decision() -> Decision {
    Decision {
        id: DecisionId::from("2"),
        title: "Should we adopt a hybrid work model or go fully remote?".into(),
        description: "Our company is deciding on post-pandemic work arrangements. We're \
                      considering a hybrid model (3 days office, 2 days remote) versus going \
                      fully remote. We need to balance productivity, company culture, and \
                      employee satisfaction."
            .into(),
        category: Category::Business,
        created_by: UserId::from("2"),
        created_at: date(2024, 1, 20),
        deadline: Some(date(2024, 2, 28)),
        status: DecisionStatus::Active,
        votes: vec![
            vote(
                "4",
                "1",
                "2",
                VoteOption::Yes,
                "Hybrid offers best of both worlds - collaboration and flexibility",
                9,
                date(2024, 1, 21),
            ),
            vote(
                "5",
                "5",
                "2",
                VoteOption::No,
                "Full remote saves costs and gives employees maximum flexibility",
                8,
                date(2024, 1, 22),
            ),
        ],
        discussions: vec![discussion(
            "3",
            "2",
            "1",
            "Hybrid model allows for spontaneous collaboration while maintaining work-life \
             balance. It's the future of work.",
            DiscussionKind::Pro,
            date(2024, 1, 21),
            15,
        )],
        insight: Some(Insight {
            id: InsightId::from("2"),
            decision_id: DecisionId::from("2"),
            summary: "The hybrid vs remote debate centers on balancing collaboration benefits \
                      with flexibility and cost considerations."
                .into(),
            pros: strs(&[
                "Maintains face-to-face collaboration opportunities",
                "Preserves company culture and spontaneous interactions",
                "Provides structure for employees who prefer office environment",
                "Easier onboarding and mentoring of new employees",
            ]),
            cons: strs(&[
                "Higher real estate and operational costs",
                "Potential for creating two-tier employee experience",
                "Commuting challenges and time waste",
                "Reduced talent pool compared to full remote",
            ]),
            sentiment: Sentiment::Positive,
            confidence: 0.8,
            recommendations: strs(&[
                "Survey employees about their preferences",
                "Run a pilot program with both models",
                "Consider flexible arrangements for different roles",
                "Invest in collaboration tools for seamless experience",
            ]),
            generated_at: date(2024, 1, 23),
        }),
        tags: strs(&["business", "remote-work", "company-culture", "productivity"]),
    }
}

fn finance_decision() -> Decision {
    Decision {
        id: DecisionId::from("3"),
        title: "Should I invest in cryptocurrency or traditional stocks?".into(),
        description: "I have $50,000 to invest and I'm torn between putting it into \
                      cryptocurrency (Bitcoin, Ethereum) or traditional stocks/ETFs. I'm 28 \
                      years old and can handle some risk, but I want to make a smart \
                      long-term decision."
            .into(),
        category: Category::Finance,
        created_by: UserId::from("3"),
        created_at: date(2024, 1, 25),
        deadline: Some(date(2024, 3, 1)),
        status: DecisionStatus::Active,
        votes: vec![
            vote(
                "6",
                "1",
                "3",
                VoteOption::No,
                "Traditional stocks have better long-term track record and stability",
                9,
                date(2024, 1, 26),
            ),
            vote(
                "7",
                "2",
                "3",
                VoteOption::Maybe,
                "Consider a mix - 70% stocks, 30% crypto for diversification",
                7,
                date(2024, 1, 27),
            ),
        ],
        discussions: vec![discussion(
            "4",
            "3",
            "1",
            "Diversification is key. Don't put all eggs in one basket. Consider index funds \
             for stable growth.",
            DiscussionKind::Neutral,
            date(2024, 1, 26),
            20,
        )],
        insight: Some(Insight {
            id: InsightId::from("3"),
            decision_id: DecisionId::from("3"),
            summary: "Investment decision between high-risk crypto and traditional stocks \
                      shows community favoring diversification and traditional investments."
                .into(),
            pros: strs(&[
                "Cryptocurrency offers high growth potential",
                "Traditional stocks provide steady, proven returns",
                "Diversification reduces overall portfolio risk",
                "Your age allows for some risk-taking",
            ]),
            cons: strs(&[
                "Cryptocurrency is highly volatile and unpredictable",
                "Traditional stocks may have lower short-term returns",
                "Missing out on potential crypto gains",
                "Inflation risk with conservative investments",
            ]),
            sentiment: Sentiment::Neutral,
            confidence: 0.85,
            recommendations: strs(&[
                "Consider a diversified portfolio approach",
                "Start with low-cost index funds as your base",
                "Allocate only 5-10% to high-risk investments",
                "Consult with a financial advisor",
            ]),
            generated_at: date(2024, 1, 28),
        }),
        tags: strs(&[
            "finance",
            "investment",
            "cryptocurrency",
            "stocks",
            "risk-management",
        ]),
    }
}

// Fixture constants only; the dates are fixed and always valid.
fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn vote(
    id: &str,
    user: &str,
    decision: &str,
    option: VoteOption,
    reasoning: &str,
    confidence: u8,
    cast_on: DateTime<Utc>,
) -> Vote {
    Vote {
        id: VoteId::from(id),
        user_id: UserId::from(user),
        decision_id: DecisionId::from(decision),
        option,
        reasoning: Some(reasoning.to_string()),
        confidence,
        created_at: cast_on,
    }
}

fn discussion(
    id: &str,
    decision: &str,
    user: &str,
    content: &str,
    kind: DiscussionKind,
    posted_on: DateTime<Utc>,
    likes: u32,
) -> Discussion {
    Discussion {
        id: DiscussionId::from(id),
        decision_id: DecisionId::from(decision),
        user_id: UserId::from(user),
        content: content.to_string(),
        kind,
        created_at: posted_on,
        likes,
        replies: Vec::new(),
    }
}
