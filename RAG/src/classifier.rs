use crate::error::{Result, ServiceError};
use crate::models::ComplaintResponse;
use crate::providers::LlmClient;
use std::sync::Arc;

pub const DEFAULT_DEPARTMENT_ID: u8 = 5;

pub const DEPARTMENTS: [(u8, &str); 5] = [
    (1, "Police Department"),
    (2, "Electricity Department"),
    (3, "Water Department"),
    (4, "Transport Department"),
    (5, "General Department"),
];

pub fn department_name(id: u8) -> &'static str {
    DEPARTMENTS
        .iter()
        .find(|(dept_id, _)| *dept_id == id)
        .map(|(_, name)| *name)
        .unwrap_or(DEPARTMENTS[4].1)
}

pub struct ComplaintClassifier {
    llm: Arc<dyn LlmClient>,
}

impl ComplaintClassifier {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn classify(&self, description: &str) -> Result<ComplaintResponse> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ServiceError::validation("No description provided"));
        }

        let prompt = build_classification_prompt(description);
        let response = self.llm.complete(&prompt).await.map_err(|e| {
            log::error!("Classification request to {} failed: {}", self.llm.model(), e);
            ServiceError::upstream(format!("Error classifying complaint: {}", e))
        })?;

        let raw_response = response.trim().to_string();
        let department_id = extract_department_id(&raw_response);
        log::info!("Complaint routed to department {}", department_id);

        Ok(ComplaintResponse {
            department: department_name(department_id).to_string(),
            department_id,
            raw_response,
        })
    }
}

pub fn build_classification_prompt(description: &str) -> String {
    format!(
        r#"You are a complaint classification assistant.
Classify the following complaint into one of the given departments:
1. Police Department
2. Electricity Department
3. Water Department
4. Transport Department
else:
5. General Department

Complaint: "{description}"

Respond with the department number (1-5) and name."#
    )
}

/// First department id, scanning 1 through 5, whose digit appears anywhere
/// in the response. Falls back to General.
///
/// This is a substring scan, not a parse: "Department 4 (not 1)" yields 1.
pub fn extract_department_id(response: &str) -> u8 {
    DEPARTMENTS
        .iter()
        .map(|(id, _)| *id)
        .find(|id| response.contains(&id.to_string()))
        .unwrap_or(DEFAULT_DEPARTMENT_ID)
}
