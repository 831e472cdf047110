//! Static analysis tables, four entries per category and list. These
//! stand in for model output, so the text is fixed verbatim: same
//! category, same bytes, every time.

use quorum_core::model::Category;

/// The one-line summary attached to every synthesized insight.
pub fn summary(category: Category) -> String {
    format!(
        "AI analysis of your {} decision shows multiple factors to consider. \
         The community input will help provide additional perspectives.",
        category
    )
}

pub fn pros(category: Category) -> [&'static str; 4] {
    match category {
        Category::Business => [
            "Potential for increased revenue and market share",
            "Opportunity to innovate and stay competitive",
            "Could improve operational efficiency",
            "May strengthen customer relationships",
        ],
        Category::Personal => [
            "Could improve your quality of life",
            "Opportunity for personal growth and development",
            "May strengthen relationships with others",
            "Could lead to greater life satisfaction",
        ],
        Category::Career => [
            "Potential for professional growth and skill development",
            "Opportunity to expand your network and connections",
            "Could lead to better compensation and benefits",
            "May provide new challenges and learning experiences",
        ],
        Category::Lifestyle => [
            "Potential for better work-life balance",
            "Opportunity to pursue your passions",
            "Could improve your physical and mental health",
            "May lead to new experiences and adventures",
        ],
        Category::Finance => [
            "Potential for long-term financial growth",
            "Opportunity to diversify your portfolio",
            "Could provide passive income streams",
            "May offer tax advantages",
        ],
        Category::Technology => [
            "Could improve efficiency and productivity",
            "Opportunity to stay current with trends",
            "May provide competitive advantages",
            "Could enhance user experience",
        ],
    }
}

pub fn cons(category: Category) -> [&'static str; 4] {
    match category {
        Category::Business => [
            "Risk of financial loss or reduced profitability",
            "Potential for operational disruptions",
            "May require substantial resource investment",
            "Could face market or competitive challenges",
        ],
        Category::Personal => [
            "Risk of disappointment or unmet expectations",
            "Potential for relationship strain",
            "May require significant lifestyle changes",
            "Could have unforeseen consequences",
        ],
        Category::Career => [
            "Risk of job instability or career setback",
            "Potential for increased stress and workload",
            "May require significant time investment",
            "Could impact work-life balance negatively",
        ],
        Category::Lifestyle => [
            "Risk of disrupting current routines",
            "Potential for financial strain",
            "May face social or family resistance",
            "Could require significant time commitment",
        ],
        Category::Finance => [
            "Risk of financial loss or market volatility",
            "Potential for liquidity constraints",
            "May have tax implications",
            "Could be affected by economic downturns",
        ],
        Category::Technology => [
            "Risk of technical issues or failures",
            "Potential for security vulnerabilities",
            "May require training and adaptation",
            "Could become obsolete quickly",
        ],
    }
}

pub fn recommendations(category: Category) -> [&'static str; 4] {
    match category {
        Category::Business => [
            "Conduct thorough market research and analysis",
            "Consult with business advisors and experts",
            "Create a detailed implementation plan",
            "Consider starting with a pilot program",
        ],
        Category::Personal => [
            "Discuss with family and close friends",
            "Consider the impact on your relationships",
            "Take time to reflect on your values and priorities",
            "Start with small steps to test the waters",
        ],
        Category::Career => [
            "Research the company culture and growth opportunities",
            "Consult with mentors and industry professionals",
            "Consider the long-term impact on your career trajectory",
            "Evaluate the financial implications and benefits",
        ],
        Category::Lifestyle => [
            "Create a detailed plan and timeline",
            "Consider the impact on your finances",
            "Discuss with affected family members",
            "Research all aspects thoroughly",
        ],
        Category::Finance => [
            "Consult with a financial advisor",
            "Diversify your investment portfolio",
            "Consider your risk tolerance and timeline",
            "Research all fees and tax implications",
        ],
        Category::Technology => [
            "Research alternatives and compare features",
            "Consider the total cost of ownership",
            "Plan for training and implementation",
            "Ensure compatibility with existing systems",
        ],
    }
}
