pub trait Show {
    fn show(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result;

    fn render(&self) -> String {
        let mut message = String::new();
        self.show(&mut message).expect("show diagnostic");
        message
    }
}
