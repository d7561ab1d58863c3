use anyhow::{bail, Context, Result};
use githubclient::{
    config::Config,
    github::{
        request::{CreateRepoRequest, UpdateRepoRequest},
        GithubClient,
    },
    logger,
};
use std::env;

const USAGE: &str = "usage: githubclient <command>

commands:
    list
    create <name> [description]
    update <owner> <repo> <description>
    delete <owner> <repo>";

#[tokio::main]
async fn main() -> Result<()> {
    logger::init()?;

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        bail!(USAGE);
    };

    let config = Config::load().await.context("cannot load config file")?;
    let client = GithubClient::new(config);

    match (command.as_str(), rest) {
        ("list", []) => {
            let repos = client.list_repos().await?;
            if repos.is_empty() {
                println!("no repositories found");
            }
            for repo in repos {
                println!(
                    "{}/{}  {}",
                    repo.owner.login,
                    repo.name,
                    repo.description.as_deref().unwrap_or("")
                );
            }
        }
        ("create", [name]) => {
            let repo = client
                .create_repo(CreateRepoRequest::new(name, ""))
                .await?;
            log::info!("created repository {}", repo.name);
        }
        ("create", [name, description]) => {
            let repo = client
                .create_repo(CreateRepoRequest::new(name, description))
                .await?;
            log::info!("created repository {}", repo.name);
        }
        ("update", [owner, repo, description]) => {
            let repo = client
                .update_repo(owner, repo, UpdateRepoRequest::new(description))
                .await?;
            log::info!("updated repository {}", repo.name);
        }
        ("delete", [owner, repo]) => {
            client.delete_repo(owner, repo).await?;
            log::info!("deleted repository {}/{}", owner, repo);
        }
        _ => bail!(USAGE),
    }

    Ok(())
}
