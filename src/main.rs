use portfolio_client::config::Config;
use portfolio_client::PortfolioClient;
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    info!(base_url = %config.api_base_url, "portfolio admin CLI starting");
    let client = PortfolioClient::new(config)?;

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("help");

    match command {
        "seed" => {
            client.seed_defaults();
            println!("seeded default collections");
        }
        "list" => {
            let collection = args.get(1).map(String::as_str).unwrap_or("");
            let json = match collection {
                "experiences" => to_json(&client.experiences.get_all().await?)?,
                "skills" => to_json(&client.skills.get_all().await?)?,
                "educations" => to_json(&client.educations.get_all().await?)?,
                "projects" => to_json(&client.projects.get_all().await?)?,
                "achievements" => to_json(&client.achievements.get_all().await?)?,
                "messages" => to_json(&client.messages.get_all().await?)?,
                "personal-info" => to_json(&client.personal_info.get().await?)?,
                other => anyhow::bail!("unknown collection '{}'", other),
            };
            println!("{}", json);
        }
        "delete" => {
            let collection = args.get(1).map(String::as_str).unwrap_or("");
            let id = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("usage: delete <collection> <id>"))?;
            match collection {
                "experiences" => client.experiences.delete(id).await?,
                "skills" => client.skills.delete(id).await?,
                "educations" => client.educations.delete(id).await?,
                "projects" => client.projects.delete(id).await?,
                "achievements" => client.achievements.delete(id).await?,
                "messages" => client.messages.delete(id).await?,
                other => anyhow::bail!("unknown collection '{}'", other),
            }
            println!("deleted {} from {}", id, collection);
        }
        "mark-read" => {
            let id = args
                .get(1)
                .ok_or_else(|| anyhow::anyhow!("usage: mark-read <message-id>"))?;
            let message = client.messages.mark_as_read(id).await?;
            println!("{}", to_json(&message)?);
        }
        _ => {
            eprintln!("usage: portfolio-client <command>");
            eprintln!("  seed                        write default collections to the local store");
            eprintln!("  list <collection>           print a collection as JSON");
            eprintln!("  delete <collection> <id>    delete an entry");
            eprintln!("  mark-read <message-id>      mark a contact message as read");
        }
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
