// ============================================================================
// Assistant Replies
// Canned guidance paragraphs, one per topic
// ============================================================================
//
// The assistant gives general guidance only, so every reply that touches
// money carries its own disclaimer. Markdown is intentional: the UI renders
// these in the chat panel.

pub(crate) const GREETING: &str = "Hello! I'm here to help with general financial information. \
    I can assist with budgeting tips, basic investment concepts, savings strategies, and general \
    financial planning. What would you like to know?";

pub(crate) const CAPABILITIES: &str = "I can provide general information about:\n\n\
    • Budgeting and expense management\n\
    • Basic investment concepts\n\
    • Savings strategies\n\
    • Debt management basics\n\
    • Financial planning fundamentals\n\
    • Using FinancePro features\n\n\
    Note: I provide general guidance only. For personalized advice, consult a certified financial advisor.";

pub(crate) const BUDGETING: &str = "**Budgeting Basics:**\n\n\
    1. **50/30/20 Rule**: Allocate 50% to needs, 30% to wants, 20% to savings\n\
    2. **Track Everything**: Use our Balance page to record all expenses\n\
    3. **Set Goals**: Use Budget Planner to set realistic savings targets\n\
    4. **Review Monthly**: Regularly review and adjust your budget\n\n\
    💡 Tip: Start by tracking expenses for one month to understand your spending patterns.\n\n\
    ⚠️ Disclaimer: This is general advice. Your situation may vary.";

pub(crate) const SAVINGS: &str = "**Effective Saving Strategies:**\n\n\
    1. **Emergency Fund First**: Build 3-6 months of expenses in a liquid account\n\
    2. **Automate Savings**: Set up automatic transfers (pay yourself first)\n\
    3. **Start Small**: Even ₹1,000-5,000/month makes a difference\n\
    4. **High-Interest Account**: Keep emergency funds in liquid mutual funds or high-yield savings\n\
    5. **Separate Accounts**: Use different accounts for different goals\n\n\
    📊 Use our Budget Planner to set and track savings goals.\n\n\
    ⚠️ Disclaimer: Savings rates and returns vary. Research current rates.";

pub(crate) const INVESTING: &str = "**Basic Investment Concepts:**\n\n\
    1. **Diversification**: Don't put all money in one asset class\n\
    2. **Time Horizon**: Match investments to goals (long-term = equity, short-term = debt)\n\
    3. **SIP Benefits**: Systematic Investment Plans reduce timing risk\n\
    4. **Risk vs Return**: Higher returns usually mean higher risk\n\
    5. **Research First**: Understand what you're investing in\n\n\
    📈 Use our Stock Information and Prediction tools for stock analysis.\n\n\
    ⚠️ Important: Investments are subject to market risks. Past performance doesn't guarantee \
    future results. Consult a SEBI-registered advisor before investing.";

pub(crate) const STOCKS: &str = "For stock analysis, I recommend using FinancePro's built-in tools:\n\n\
    📊 **Stock Information**: Get detailed company data, financials, and market metrics\n\
    🔮 **Stock Prediction**: View AI-powered price forecasts with sentiment analysis\n\n\
    ⚠️ Important: Stock predictions are for informational purposes only and are not buy/sell \
    recommendations. Always:\n\
    • Do your own research\n\
    • Understand the risks\n\
    • Consult a registered financial advisor\n\
    • Never invest based solely on predictions\n\n\
    Stock markets are volatile - only invest what you can afford to lose.";

pub(crate) const DEBT: &str = "**Debt Management Strategies:**\n\n\
    1. **Prioritize High-Interest Debt**: Pay off credit cards and high-interest loans first\n\
    2. **Snowball Method**: Pay smallest debts first for motivation\n\
    3. **Avalanche Method**: Pay highest interest rate debts first (saves more money)\n\
    4. **Make Extra Payments**: Pay more than minimum when possible\n\
    5. **Avoid New Debt**: Stop accumulating while paying off existing debt\n\n\
    📋 Use our Bills page to track and manage your payments.\n\n\
    ⚠️ Note: For serious debt issues, consider consulting a credit counselor.";

pub(crate) const TAX: &str = "**Tax Planning Basics (India):**\n\n\
    1. **Section 80C**: Invest in ELSS, PPF, NSC, tax-saving FDs (₹1.5L limit)\n\
    2. **Health Insurance**: Section 80D benefits\n\
    3. **Home Loan**: Section 24 and 80C benefits\n\
    4. **EPF Contributions**: Tax-free up to limit\n\
    5. **File On Time**: Avoid penalties by filing ITR before July 31\n\n\
    📊 Use our Investment Calculator to see tax-saving impact.\n\n\
    ⚠️ Important: Tax laws change. Consult a Chartered Accountant for personalized tax advice.";

pub(crate) const PLANNING: &str = "**Financial Planning Fundamentals:**\n\n\
    1. **Set Clear Goals**: Define short-term (1-3 yrs), medium-term (3-7 yrs), and long-term (7+ yrs) goals\n\
    2. **Emergency Fund**: Build 3-6 months expenses first\n\
    3. **Insurance**: Get term life and health insurance\n\
    4. **Start Early**: Compound interest works best over long periods\n\
    5. **Review Regularly**: Adjust plans as life circumstances change\n\n\
    💼 Use our Investment Calculator to plan for future goals.\n\n\
    ⚠️ For comprehensive planning, consult a Certified Financial Planner (CFP).";

pub(crate) const RISK: &str = "**Understanding Investment Risk:**\n\n\
    • **Low Risk**: Bank FDs, Government bonds (lower returns, capital protected)\n\
    • **Medium Risk**: Balanced mutual funds, corporate bonds\n\
    • **High Risk**: Equity stocks, aggressive mutual funds (higher potential returns, capital at risk)\n\n\
    Key Points:\n\
    • Higher returns usually mean higher risk\n\
    • Diversification reduces risk\n\
    • Time horizon matters - long-term reduces equity risk\n\
    • Never invest emergency funds in risky assets\n\n\
    📈 Check risk assessments in our Stock Prediction tool.\n\n\
    ⚠️ All investments carry risk. Only invest after understanding your risk tolerance.";

pub(crate) const FEATURES: &str = "FinancePro offers several features:\n\n\
    💰 **Balance**: Track income and expenses\n\
    📊 **Charts**: Visualize spending patterns\n\
    📋 **Bills**: Manage bill payments\n\
    💼 **Budget Planner**: Create and track budgets\n\
    🧮 **Investment Calculator**: Plan future investments\n\
    📰 **News**: Latest financial news\n\
    📈 **Stock Info**: Detailed stock analysis\n\
    🔮 **Stock Prediction**: AI-powered price forecasts\n\n\
    💡 Tip: Start with Balance to track expenses, then use Budget Planner to create a plan!";

pub(crate) const CALCULATIONS: &str = "For calculations, use FinancePro's built-in tools:\n\n\
    🧮 **Investment Calculator**: Calculate future value, SIP returns, compound interest\n\
    📊 **Stock Prediction**: See predicted returns and price changes\n\n\
    These tools handle complex calculations accurately. Would you like to know how to use any \
    specific calculator?";

pub(crate) const IDENTITY: &str = "I'm FinancePro Assistant, a financial guidance chatbot. I provide \
    general financial information and tips based on common financial principles.\n\n\
    ⚠️ Important: I provide general guidance only. I'm not a replacement for:\n\
    • Certified Financial Advisors\n\
    • Tax Consultants\n\
    • Legal Advisors\n\
    • Registered Investment Advisors\n\n\
    For personalized advice, always consult qualified professionals.";

pub(crate) const REPHRASE: &str = "Could you please rephrase your question? I can help with \
    budgeting, investments, savings, debt management, tax planning, and using FinancePro features.";

pub(crate) const FALLBACK: &str = "I understand you're asking about finance. Here's how I can help:\n\n\
    **I can provide general information about:**\n\
    • Budgeting and expense tracking\n\
    • Basic investment concepts\n\
    • Savings strategies\n\
    • Debt management\n\
    • Financial planning basics\n\
    • Using FinancePro features\n\n\
    **Please note:**\n\
    ⚠️ I provide general guidance only\n\
    ⚠️ Not personalized financial advice\n\
    ⚠️ Always consult certified professionals for important decisions\n\n\
    Could you try rephrasing your question? For example:\n\
    • 'How do I create a budget?'\n\
    • 'What is SIP?'\n\
    • 'How to save money?'\n\
    • 'How to use the Investment Calculator?'";
