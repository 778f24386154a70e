use clap::Parser;
use env_logger::Builder;
use eyre::{eyre, Result};
use log::{debug, LevelFilter};

use mailhog_inbox::cfg::config::{load_config, resolve_config_path, Config};
use mailhog_inbox::{InboxClient, MailApi, MessageRecord};

mod cli;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = Builder::new();
    builder.parse_default_env();
    if cli.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.try_init().ok();

    let mut config = match resolve_config_path(&cli.config) {
        Some(path) => load_config(&path)?,
        None => {
            debug!("No config file found, using defaults");
            Config::default()
        }
    };
    if let Some(url) = cli.url {
        config.url = url;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let mut client = InboxClient::from_config(&config);
    run(&mut client, cli.command)
}

fn run<A: MailApi>(client: &mut InboxClient<A>, command: Command) -> Result<()> {
    match command {
        Command::Count => {
            println!("{}", client.count()?);
        }
        Command::DeleteAll => {
            client.delete_all()?;
        }
        Command::List { to } => {
            let view = match to.as_deref() {
                Some(address) => client.select_inbox_for(address)?,
                None => client.fetch_all()?,
            };
            for msg in view {
                println!(
                    "{}\t{}\t{}",
                    msg.id(),
                    msg.created_at().to_rfc3339(),
                    msg.subject().unwrap_or("")
                );
            }
        }
        Command::Open { to, count } => {
            match to.as_deref() {
                Some(address) => client.select_inbox_for(address)?,
                None => client.fetch_all()?,
            };
            for _ in 0..count {
                print_message(client.open_next()?)?;
            }
        }
        Command::Grab { to, pattern } => {
            let value = client
                .grab_field(&to, &pattern)
                .map_err(|e| eyre!("Failed to grab '{}' for {}: {}", pattern, to, e))?;
            println!("{}", value);
        }
    }
    Ok(())
}

fn print_message(msg: &MessageRecord) -> Result<()> {
    println!("Id:         {}", msg.id());
    println!("Date:       {}", msg.created_at().to_rfc3339());
    println!("From:       {}", msg.sender()?);
    println!("Recipients: {}", msg.recipients()?);
    println!("Subject:    {}", msg.subject()?);
    if let Ok(reply_to) = msg.reply_to() {
        println!("Reply-To:   {}", reply_to);
    }
    if let Ok(priority) = msg.priority() {
        println!("Priority:   {}", priority);
    }
    println!();
    println!("{}", msg.body());
    println!();
    Ok(())
}
