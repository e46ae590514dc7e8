use std::cell::RefCell;
use std::rc::Rc;

use swiperow_ui::{SwipeAction, SwipeListHost};

#[derive(Clone, Debug)]
pub struct Mail {
    pub id: u64,
    pub subject: &'static str,
    pub unread: bool,
    pub flagged: bool,
}

/// Mail list shared with the swipe action handlers.
#[derive(Clone, Default)]
pub struct Inbox {
    mails: Rc<RefCell<Vec<Mail>>>,
    archived: Rc<RefCell<Vec<Mail>>>,
}

impl Inbox {
    pub fn with_sample_mail() -> Self {
        let subjects = [
            "Quarterly report",
            "Lunch on Friday?",
            "Your order has shipped",
            "Re: build failures",
            "Team offsite agenda",
        ];
        let mails = subjects
            .into_iter()
            .zip(1u64..)
            .map(|(subject, id)| Mail {
                id,
                subject,
                unread: id % 2 == 1,
                flagged: false,
            })
            .collect();
        Self {
            mails: Rc::new(RefCell::new(mails)),
            archived: Rc::default(),
        }
    }

    pub fn ids(&self) -> Vec<u64> {
        self.mails.borrow().iter().map(|mail| mail.id).collect()
    }

    pub fn mail(&self, id: u64) -> Option<Mail> {
        self.mails.borrow().iter().find(|mail| mail.id == id).cloned()
    }

    pub fn archived_count(&self) -> usize {
        self.archived.borrow().len()
    }

    fn update(&self, id: u64, f: impl FnOnce(&mut Mail)) {
        if let Some(mail) = self.mails.borrow_mut().iter_mut().find(|mail| mail.id == id) {
            f(mail);
        }
    }

    fn archive(&self, id: u64) {
        let mut mails = self.mails.borrow_mut();
        if let Some(index) = mails.iter().position(|mail| mail.id == id) {
            let mail = mails.remove(index);
            log::info!("archived \"{}\"", mail.subject);
            self.archived.borrow_mut().push(mail);
        }
    }

    /// Leading side toggles read state; trailing side flags and archives.
    /// Archive is outermost, so a full swipe left archives.
    fn actions(&self, id: u64) -> (Vec<SwipeAction>, Vec<SwipeAction>) {
        let inbox = self.clone();
        let read = SwipeAction::new("envelope", move || {
            inbox.update(id, |mail| mail.unread = !mail.unread)
        });

        let inbox = self.clone();
        let flag = SwipeAction::new("flag", move || {
            inbox.update(id, |mail| mail.flagged = !mail.flagged)
        });
        let inbox = self.clone();
        let archive = SwipeAction::new("archive", move || inbox.archive(id));

        (vec![read], vec![flag, archive])
    }

    /// Binds unbound mail to rows and recycles rows whose mail is gone.
    /// Bound rows keep their actions, and with them their swipe state.
    pub fn bind(&self, host: &mut SwipeListHost) {
        let ids = self.ids();
        host.release_non_visible(&ids);
        for id in ids {
            if host.row(id).is_some() {
                continue;
            }
            let (left, right) = self.actions(id);
            host.bind_row(id, None, left, right);
        }
    }
}
