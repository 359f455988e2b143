//! The interactive console loop.
//!
//! Translates raw menu input into typed [`RegistryClient`] calls and renders
//! results and errors back to the human. Registry errors are presented and the
//! loop continues; only I/O failures on the console's own streams end the
//! session.
//!
//! The loop is generic over its input and output streams so tests can drive it
//! with in-memory buffers instead of stdin/stdout.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::debug;

use crate::clients::RegistryClient;
use crate::model::ResourceKind;
use crate::registry::{MaintenanceOutcome, RegistryError};

/// The seven-item menu shown before every choice.
pub const MENU: &str = "1. Add Resource\n2. Use Resource\n3. Maintain Resource\n4. Add Project\n5. Allocate Resource to Project\n6. Display Resource State\n7. Exit\nEnter your choice: ";

/// A parsed menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddResource,
    UseResource,
    MaintainResource,
    AddProject,
    Allocate,
    DisplayState,
    Exit,
}

impl Command {
    /// Parses a raw menu line. Returns `None` for anything outside 1-7.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Command::AddResource),
            "2" => Some(Command::UseResource),
            "3" => Some(Command::MaintainResource),
            "4" => Some(Command::AddProject),
            "5" => Some(Command::Allocate),
            "6" => Some(Command::DisplayState),
            "7" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Maps the resource-type prompt answer to a kind.
///
/// Choice `1` is a worker; any other answer falls through to equipment, as the
/// original menu did.
pub fn parse_kind(line: &str) -> ResourceKind {
    if line.trim() == "1" {
        ResourceKind::Worker
    } else {
        ResourceKind::Equipment
    }
}

/// Runs the menu loop until the user exits or input ends.
pub async fn run<R, W>(client: &RegistryClient, input: R, output: W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = Session {
        lines: input.lines(),
        output,
        client,
    };
    session.run().await
}

struct Session<'a, R, W> {
    lines: Lines<R>,
    output: W,
    client: &'a RegistryClient,
}

impl<R, W> Session<'_, R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn run(&mut self) -> io::Result<()> {
        loop {
            self.write(MENU).await?;
            let Some(line) = self.lines.next_line().await? else {
                break;
            };
            let Some(command) = Command::parse(&line) else {
                self.write("Invalid choice. Please try again.\n").await?;
                continue;
            };
            debug!(?command, "Dispatching menu choice");
            if command == Command::Exit {
                self.write("Exiting...\n").await?;
                break;
            }
            self.dispatch(command).await?;
        }
        Ok(())
    }

    async fn dispatch(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::AddResource => self.add_resource().await,
            Command::UseResource => self.use_resource().await,
            Command::MaintainResource => self.maintain_resource().await,
            Command::AddProject => self.add_project().await,
            Command::Allocate => self.allocate().await,
            Command::DisplayState => self.display_state().await,
            // Exit is handled by the loop itself.
            Command::Exit => Ok(()),
        }
    }

    async fn add_resource(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt("Enter Resource ID to add: ").await? else {
            return Ok(());
        };
        let Some(choice) = self
            .prompt("Select Resource Type (1. Worker, 2. Equipment): ")
            .await?
        else {
            return Ok(());
        };
        let kind = parse_kind(&choice);
        match self.client.add_resource(&id, kind).await {
            Ok(()) => {
                let line = format!("Resource {} of type {} added.", id, kind);
                self.write(&line).await?;
                self.write("\n").await?;
                if let Err(e) = self.client.log_transaction(&line).await {
                    self.report_error(&e).await?;
                }
            }
            Err(e) => self.report_error(&e).await?,
        }
        Ok(())
    }

    async fn use_resource(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt("Enter Resource ID to use: ").await? else {
            return Ok(());
        };
        match self.client.mark_in_use(&id).await {
            Ok(()) => {
                self.write(&format!("Resource {} is now in use.\n", id))
                    .await?;
            }
            Err(e) => self.report_error(&e).await?,
        }
        Ok(())
    }

    async fn maintain_resource(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt("Enter Resource ID to maintain: ").await? else {
            return Ok(());
        };
        match self.client.maintain_resource(&id).await {
            Ok(MaintenanceOutcome::UnderMaintenance) => {
                self.write(&format!("Resource {} is under maintenance.\n", id))
                    .await?;
            }
            Ok(MaintenanceOutcome::NotEquipment) => {
                self.write(&format!(
                    "Resource {} is not equipment and cannot be maintained.\n",
                    id
                ))
                .await?;
            }
            Err(e) => self.report_error(&e).await?,
        }
        Ok(())
    }

    async fn add_project(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt("Enter Project ID to add: ").await? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Enter Project Name: ").await? else {
            return Ok(());
        };
        match self.client.add_project(&id, &name).await {
            Ok(()) => {
                let line = format!("Project {} named {} added.", id, name);
                self.write(&line).await?;
                self.write("\n").await?;
                if let Err(e) = self.client.log_transaction(&line).await {
                    self.report_error(&e).await?;
                }
            }
            Err(e) => self.report_error(&e).await?,
        }
        Ok(())
    }

    async fn allocate(&mut self) -> io::Result<()> {
        let Some(resource_id) = self.prompt("Enter Resource ID to allocate: ").await? else {
            return Ok(());
        };
        let Some(project_id) = self.prompt("Enter Project ID to allocate to: ").await? else {
            return Ok(());
        };
        match self.client.allocate_resource(&resource_id, &project_id).await {
            Ok(()) => {
                self.write(&format!(
                    "Resource {} allocated to project {}.\n",
                    resource_id, project_id
                ))
                .await?;
            }
            Err(e) => self.report_error(&e).await?,
        }
        Ok(())
    }

    async fn display_state(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt("Enter Resource ID to display state: ").await? else {
            return Ok(());
        };
        match self.client.describe_state(&id).await {
            Ok(report) => {
                self.write(&report).await?;
                self.write("\n").await?;
            }
            Err(e) => self.report_error(&e).await?,
        }
        Ok(())
    }

    /// Writes a prompt and reads the answer. `None` means input ended.
    async fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.write(text).await?;
        Ok(self
            .lines
            .next_line()
            .await?
            .map(|line| line.trim().to_string()))
    }

    async fn report_error(&mut self, error: &RegistryError) -> io::Result<()> {
        self.write(&format!("Error: {}\n", error)).await
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::mock::{
        create_mock_client, expect_add_resource, expect_describe_state, expect_log_transaction,
        expect_maintain,
    };
    use tokio::io::BufReader;

    async fn run_script(client: &RegistryClient, input: &str) -> String {
        let mut output = Vec::new();
        run(client, BufReader::new(input.as_bytes()), &mut output)
            .await
            .expect("console I/O failed");
        String::from_utf8(output).expect("console output not UTF-8")
    }

    #[test]
    fn parse_maps_menu_digits_to_commands() {
        assert_eq!(Command::parse("1"), Some(Command::AddResource));
        assert_eq!(Command::parse(" 5 "), Some(Command::Allocate));
        assert_eq!(Command::parse("7"), Some(Command::Exit));
        assert_eq!(Command::parse("0"), None);
        assert_eq!(Command::parse("eight"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn parse_kind_defaults_to_equipment() {
        assert_eq!(parse_kind("1"), ResourceKind::Worker);
        assert_eq!(parse_kind("2"), ResourceKind::Equipment);
        assert_eq!(parse_kind("anything"), ResourceKind::Equipment);
    }

    #[tokio::test]
    async fn add_resource_flow_confirms_and_journals() {
        let (client, mut receiver) = create_mock_client(10);
        let script = tokio::spawn(async move {
            let (id, kind, respond_to) = expect_add_resource(&mut receiver)
                .await
                .expect("Expected AddResource request");
            assert_eq!(id, "R1");
            assert_eq!(kind, ResourceKind::Equipment);
            respond_to.send(Ok(())).unwrap();

            let (message, respond_to) = expect_log_transaction(&mut receiver)
                .await
                .expect("Expected LogTransaction request");
            assert_eq!(message, "Resource R1 of type equipment added.");
            respond_to.send(Ok(())).unwrap();
        });

        let output = run_script(&client, "1\nR1\n2\n7\n").await;
        script.await.unwrap();

        assert!(output.contains("Resource R1 of type equipment added."));
        assert!(output.contains("Exiting..."));
    }

    #[tokio::test]
    async fn maintenance_rejection_is_rendered_not_errored() {
        let (client, mut receiver) = create_mock_client(10);
        let script = tokio::spawn(async move {
            let (id, respond_to) = expect_maintain(&mut receiver)
                .await
                .expect("Expected Maintain request");
            assert_eq!(id, "alice");
            respond_to.send(Ok(MaintenanceOutcome::NotEquipment)).unwrap();
        });

        let output = run_script(&client, "3\nalice\n7\n").await;
        script.await.unwrap();

        assert!(output.contains("Resource alice is not equipment and cannot be maintained."));
        assert!(!output.contains("Error:"));
    }

    #[tokio::test]
    async fn registry_errors_are_presented_and_loop_continues() {
        let (client, mut receiver) = create_mock_client(10);
        let script = tokio::spawn(async move {
            let (id, respond_to) = expect_describe_state(&mut receiver)
                .await
                .expect("Expected DescribeState request");
            assert_eq!(id, "R9");
            respond_to
                .send(Err(RegistryError::ResourceNotFound("R9".to_string())))
                .unwrap();
        });

        let output = run_script(&client, "6\nR9\n7\n").await;
        script.await.unwrap();

        assert!(output.contains("Error: Resource not found: R9"));
        // The loop survived the error: the menu came back and exit ran.
        assert!(output.contains("Exiting..."));
    }

    #[tokio::test]
    async fn state_report_is_echoed_verbatim() {
        let (client, mut receiver) = create_mock_client(10);
        let script = tokio::spawn(async move {
            let (id, respond_to) = expect_describe_state(&mut receiver)
                .await
                .expect("Expected DescribeState request");
            assert_eq!(id, "R1");
            respond_to
                .send(Ok(
                    "Resource R1 is under maintenance and allocated to project Alpha.".to_string(),
                ))
                .unwrap();
        });

        let output = run_script(&client, "6\nR1\n7\n").await;
        script.await.unwrap();

        assert!(
            output.contains("Resource R1 is under maintenance and allocated to project Alpha.")
        );
    }

    #[tokio::test]
    async fn invalid_choice_reprompts() {
        let (client, _receiver) = create_mock_client(10);

        let output = run_script(&client, "9\n7\n").await;

        assert!(output.contains("Invalid choice. Please try again."));
        assert!(output.contains("Exiting..."));
    }
}
