use reqwest::Client;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new();
    let base_url =
        std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

    println!("🔍 Testing chatbot + classifier API");

    println!("\n📋 Health Check:");
    let home: serde_json::Value = client.get(format!("{}/", base_url)).send().await?.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&home)?);

    println!("\n📚 Indexed content:");
    let debug: serde_json::Value = client
        .get(format!("{}/debug/pdf-content", base_url))
        .send()
        .await?
        .json()
        .await?;
    println!("Response: {}", serde_json::to_string_pretty(&debug)?);

    println!("\n💬 Chat:");
    let chat_response = client
        .post(format!("{}/chat", base_url))
        .json(&json!({ "question": "What is your contact email?" }))
        .send()
        .await?;
    println!("Status: {}", chat_response.status());
    let chat_json: serde_json::Value = chat_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&chat_json)?);

    println!("\n🏛️ Classify:");
    let classify_response = client
        .post(format!("{}/classify", base_url))
        .json(&json!({ "description": "My electricity meter is sparking" }))
        .send()
        .await?;
    println!("Status: {}", classify_response.status());
    let classify_json: serde_json::Value = classify_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&classify_json)?);

    println!("\n✅ Client test completed!");
    Ok(())
}
