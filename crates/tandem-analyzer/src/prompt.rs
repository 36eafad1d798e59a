//! Prompt construction for pairwise relationship analysis

use tandem_domain::BusinessRecord;

/// System message sent with every analysis request
pub const SYSTEM_PROMPT: &str = "You are an expert business consultant specializing in \
identifying strategic partnership opportunities. Analyze business profiles and return \
structured JSON data about potential relationships.";

const TAXONOMY: &str = r#"Evaluate ALL possible relationship types:
1. VENDOR: Could A provide services to B, or B to A? (directional)
2. PARTNER: Could they collaborate on joint offerings? (mutual)
3. REFERRAL: Do they serve similar customers without competing? (mutual)
4. COLLABORATION: Could they work together on projects/events? (mutual)
5. SUPPLY_CHAIN: Are their services sequential in a customer journey? (directional)"#;

const OUTPUT_SCHEMA: &str = r#"Return ONLY valid JSON with this exact structure:
{
  "relationships": [
    {
      "from": "Business A" or "Business B",
      "to": "Business A" or "Business B",
      "type": "vendor" | "partner" | "referral" | "collaboration" | "supply_chain",
      "confidence": 0-100 (integer),
      "reasoning": "2-3 sentences explaining WHY this relationship makes business sense",
      "value_prop": "Specific quantifiable benefit (revenue potential, cost savings, market access)",
      "collaboration_example": "A concrete, realistic example of how this partnership would work in practice, with scenario, deliverables and outcomes (2-3 sentences)",
      "synergy_potential": "What makes THIS pairing special vs generic partnerships (1-2 sentences)",
      "action_items": [
        "Specific actionable step 1",
        "Specific actionable step 2",
        "Specific actionable step 3"
      ],
      "estimated_value": "high" | "medium" | "low"
    }
  ],
  "mutual_benefit": true or false
}"#;

const RULES: &str = r#"IMPORTANT:
- Only include relationships with confidence >= 50
- Be specific about value exchange and benefits
- Action items should be concrete, not generic advice
- Use real business scenarios that could happen next week
- If NO meaningful relationship exists (confidence < 50), return an empty relationships array
- Focus on PRACTICAL, REVENUE-GENERATING partnerships"#;

/// Build the analysis prompt for one unordered pair
///
/// The prompt refers to the two records only by the symbolic labels
/// "Business A" and "Business B"; the parser maps those labels back to
/// concrete ids afterwards.
pub fn build_analysis_prompt(a: &BusinessRecord, b: &BusinessRecord) -> String {
    format!(
        "Analyze potential business relationships between these two businesses:\n\n\
BUSINESS A:\n{}\n\
BUSINESS B:\n{}\n\
{}\n\n{}\n\n{}",
        profile_block(a),
        profile_block(b),
        TAXONOMY,
        OUTPUT_SCHEMA,
        RULES
    )
}

fn profile_block(business: &BusinessRecord) -> String {
    format!(
        "Name: {}\n\
Contact: {}\n\
Industry: {}\n\
Description: {}\n\
Services: {}\n\
Target Market: {}\n\
Current Needs: {}\n",
        business.name,
        business.contact_name,
        business.industry,
        business.description,
        business.services,
        business.target_market,
        business.current_needs
    )
}
