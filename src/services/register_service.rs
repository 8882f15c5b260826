use crate::services::inquiry_service::InquiryService;

#[derive(Clone)]
pub struct ServiceRegister {
    pub inquiry_service: InquiryService,
}

impl ServiceRegister {
    pub fn new(inquiry_service: InquiryService) -> Self {
        Self { inquiry_service }
    }
}
