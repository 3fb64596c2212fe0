mod common;

mod tests {
    use embassy_futures::block_on;
    use embassy_futures::join::join;
    use embassy_time::{Duration, Timer};
    use lightbar_animator::{
        Command, CommandChannel, Engine, EngineConfig, EngineState, Family, Reply, ReplyChannel,
    };

    use crate::common::RecordingTransport;

    const ADDRESS: &str = "ws://lightbar.local:81";

    #[test]
    fn test_run_serves_commands_and_frames() {
        let mut engine = Engine::new(RecordingTransport::new(), EngineConfig::default());
        let commands = CommandChannel::<4>::new();
        let replies = ReplyChannel::<4>::new();

        let controller = async {
            commands.send(Command::init(ADDRESS).unwrap()).await;
            assert_eq!(replies.receive().await, Reply::Initialized);

            commands
                .send(Command::Start {
                    frame_rate: Some(100),
                    family: Some(Family::Listening),
                })
                .await;
            assert_eq!(replies.receive().await, Reply::Started);

            Timer::after(Duration::from_millis(80)).await;
            commands.send(Command::Uninit).await;
            assert_eq!(replies.receive().await, Reply::Uninitialized);
        };

        block_on(join(
            engine.run(commands.receiver(), replies.sender()),
            controller,
        ));

        assert_eq!(engine.state(), EngineState::Closed);
        assert!(engine.frame_number() > 0);
        let transport = engine.into_transport();
        assert!(!transport.sent.is_empty());
        assert_eq!(transport.closes, 1);
    }

    #[test]
    fn test_run_replies_without_animation() {
        let mut engine = Engine::new(RecordingTransport::new(), EngineConfig::default());
        let commands = CommandChannel::<4>::new();
        let replies = ReplyChannel::<4>::new();

        let controller = async {
            commands.send(Command::Stop).await;
            assert_eq!(replies.receive().await, Reply::Stopped);
            commands.send(Command::ClearLedStrip).await;
            assert_eq!(replies.receive().await, Reply::NotInitialized);
            commands.send(Command::init(ADDRESS).unwrap()).await;
            assert_eq!(replies.receive().await, Reply::Initialized);
            commands.send(Command::ClearLedStrip).await;
            assert_eq!(replies.receive().await, Reply::LedStripCleared);
            commands.send(Command::Uninit).await;
            assert_eq!(replies.receive().await, Reply::Uninitialized);
        };

        block_on(join(
            engine.run(commands.receiver(), replies.sender()),
            controller,
        ));

        let transport = engine.into_transport();
        assert_eq!(transport.sent.len(), 1);
        assert_eq!(transport.opened.len(), 1);
    }
}
