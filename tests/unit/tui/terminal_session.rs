use super::*;
use std::sync::Mutex;

type Log = Arc<Mutex<Vec<String>>>;

struct RecordingScreen {
    log: Log,
    fail_enter: bool,
}

impl ScreenOps for RecordingScreen {
    fn enter(&self) -> io::Result<()> {
        self.log.lock().unwrap().push("enter".to_string());
        if self.fail_enter {
            return Err(io::Error::new(io::ErrorKind::Other, "no tty"));
        }
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.log.lock().unwrap().push("leave".to_string());
        Ok(())
    }
}

struct NoticeSink(Log);

impl Write for NoticeSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf).into_owned();
        self.0.lock().unwrap().push(format!("notice:{text}"));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn session(fail_enter: bool) -> (io::Result<TerminalSession>, Log) {
    let log = Log::default();
    let ops = Arc::new(RecordingScreen {
        log: log.clone(),
        fail_enter,
    });
    let session = TerminalSession::with_ops(ops, Box::new(NoticeSink(log.clone())));
    (session, log)
}

fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

#[test]
fn finish_leaves_the_screen_before_printing() {
    let (session, log) = session(false);
    session.unwrap().finish(Some("sign-in required")).unwrap();

    let entries = entries(&log);
    assert_eq!(entries[..2], ["enter", "leave"]);
    assert!(entries[2..].concat().contains("sign-in required"));
}

#[test]
fn finish_without_notice_prints_nothing() {
    let (session, log) = session(false);
    session.unwrap().finish(None).unwrap();

    assert_eq!(entries(&log), ["enter", "leave"]);
}

#[test]
fn screen_is_left_once_across_restorer_and_drop() {
    let (session, log) = session(false);
    let session = session.unwrap();
    let restorer = session.restorer();
    assert!(!restorer.has_left());

    restorer.leave().unwrap();
    drop(session);

    assert!(restorer.has_left());
    assert_eq!(entries(&log), ["enter", "leave"]);
}

#[test]
fn failed_enter_still_cleans_up() {
    let (session, log) = session(true);

    assert!(session.is_err());
    assert_eq!(entries(&log), ["enter", "leave"]);
}

#[test]
fn inert_watch_never_fires() {
    assert_eq!(SignalWatch::inert().poll(), None);
    assert_eq!(TerminationSignal::Interrupt.exit_code(), 130);
    assert_eq!(TerminationSignal::Terminate.exit_code(), 143);
}
