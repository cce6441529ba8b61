//! Localized strings for every supported language.
//!
//! Each table is a flat list of `(key, text)` pairs. Strings are stored raw
//! and must be HTML-escaped by whoever renders them.

use super::keys::TranslationKey as K;
use super::Language;

/// One language's table.
pub type Entries = &'static [(K, &'static str)];

/// Source tables in selector order.
pub const SOURCES: [(Language, Entries); 5] = [
    (Language::ENGLISH, ENGLISH),
    (Language::HINDI, HINDI),
    (Language::MARATHI, MARATHI),
    (Language::GUJARATI, GUJARATI),
    (Language::TAMIL, TAMIL),
];

// ==================== English Strings ====================

/// English strings (canonical)
pub const ENGLISH: Entries = &[
    // Landing page
    (K::Title, "Digital Farm & Biosecurity Management Platform"),
    (K::Subtitle, "Empowering Farmers with Smart Tools"),
    (K::SelectRole, "Select your role to continue"),
    (K::Welcome, "Welcome back!"),
    // Roles
    (K::Admin, "Administrator"),
    (K::Farmer, "Farmer"),
    (K::Visitor, "Visitor"),
    (K::AdminDesc, "Manage farms, approvals & reports"),
    (K::FarmerDesc, "Tasks, alerts & training modules"),
    (K::VisitorDesc, "Learn about farm management"),
    // Login
    (K::Login, "Login"),
    (K::Username, "Username/Phone/Email"),
    (K::Password, "Password"),
    (K::EnterUsername, "Enter username, phone, or email"),
    (K::EnterPassword, "Enter your password"),
    (K::ForgotPassword, "Forgot Password?"),
    (K::Help, "Help"),
    (K::VerifyOtp, "Verify OTP"),
    (K::LoginWithOtp, "Login with OTP"),
    (K::EnterOtp, "Enter OTP sent to your phone"),
    (K::BackToPassword, "Back to password login"),
    (K::OtpSent, "OTP sent to your phone!"),
    (K::LoginFailed, "Login failed. Please check your details and try again."),
    // Role-specific login titles
    (K::AdminLogin, "Administrator Login"),
    (K::FarmerLogin, "Farmer Login"),
    (K::VisitorLogin, "Visitor Login"),
    // Dashboard
    (K::DashboardOverview, "Dashboard Overview"),
    (K::AdminDashboard, "Administrator Dashboard"),
    (K::FarmerDashboard, "Farmer Dashboard"),
    (K::VisitorDashboard, "Visitor Dashboard"),
    (K::AdminDescFull, "Manage your farming ecosystem and monitor system performance"),
    (K::FarmerDescFull, "Monitor your farm health, tasks, and performance metrics"),
    (K::VisitorDescFull, "Explore nearby farms and learn about biosecurity practices"),
    // Feature cards
    (K::FarmManagement, "Farm Management"),
    (K::ReportsAnalytics, "Reports & Analytics"),
    (K::Approvals, "Approvals"),
    (K::TrainingModules, "Training Modules"),
    (K::MyFarm, "My Farm"),
    (K::DiseaseAlerts, "Disease Alerts"),
    (K::Training, "Training"),
    (K::FarmPerformance, "Farm Performance"),
    (K::NearbyFarms, "Nearby Farms"),
    (K::RiskAssessment, "Risk Assessment"),
    (K::LearningResources, "Learning Resources"),
    (K::FarmDirectory, "Farm Directory"),
    // Feature descriptions
    (K::ManageAllFarms, "Manage all registered farms"),
    (K::ViewReports, "View system-wide reports"),
    (K::ReviewRequests, "Review and approve requests"),
    (K::ManageContent, "Manage learning content"),
    (K::ManageFarm, "Manage your farm details"),
    (K::LatestAlerts, "Latest health notifications"),
    (K::AccessModules, "Access learning modules"),
    (K::ViewMetrics, "View your farm metrics"),
    (K::ExploreFarms, "Explore local farms"),
    (K::ViewScores, "View farm risk scores"),
    (K::EducationalContent, "Access educational content"),
    (K::BrowseListings, "Browse farm listings"),
    // Quick stats
    (K::QuickStats, "Quick Stats"),
    (K::ActiveFarms, "Active Farms"),
    (K::PendingTasks, "Pending Tasks"),
    (K::NearbyFarmsCount, "Nearby Farms"),
    (K::PendingApprovals, "Pending Approvals"),
    (K::ActiveAlerts, "Active Alerts"),
    (K::HighRiskFarms, "High Risk Farms"),
    (K::SystemHealth, "System Health"),
    (K::FarmHealthScore, "Farm Health Score"),
    (K::AverageSafetyScore, "Average Safety Score"),
    // Support & helpline
    (K::EmergencySupport, "Emergency Support"),
    (K::DiseaseAlert, "Disease Alert"),
    (K::VeterinaryEmergency, "Veterinary Emergency"),
    (K::Available247, "Available 24/7 for farm emergencies"),
    (K::TechnicalSupport, "Technical Support"),
    (K::Whatsapp, "WhatsApp"),
    (K::MonSat, "Mon-Sat: 9 AM - 6 PM"),
    (K::FarmerHelpline, "Farmer Helpline"),
    (K::Helpline, "Helpline"),
    (K::TrainingSupport, "Training Support"),
    (K::FreeServices, "Free training & consultation services"),
    (K::NeedHelp, "Need Help?"),
    // Footer
    (K::Copyright, "© 2024 Digital Farm & Biosecurity Management Platform"),
    (K::Ministry, "Ministry of Agriculture & Farmers Welfare"),
    // Header
    (K::Logout, "Logout"),
    (K::WelcomeBack, "Welcome!"),
    (K::ChooseLanguage, "Choose your language"),
];

// ==================== Hindi Strings ====================

pub const HINDI: Entries = &[
    (K::Title, "डिजिटल फार्म और बायोसेक्योरिटी प्रबंधन प्लेटफॉर्म"),
    (K::Subtitle, "स्मार्ट टूल्स के साथ किसानों को सशक्त बनाना"),
    (K::SelectRole, "जारी रखने के लिए अपनी भूमिका चुनें"),
    (K::Welcome, "वापसी पर स्वागत!"),
    (K::Admin, "प्रशासक"),
    (K::Farmer, "किसान"),
    (K::Visitor, "आगंतुक"),
    (K::AdminDesc, "फार्म, अनुमोदन और रिपोर्ट प्रबंधित करें"),
    (K::FarmerDesc, "कार्य, अलर्ट और प्रशिक्षण मॉड्यूल"),
    (K::VisitorDesc, "फार्म प्रबंधन के बारे में जानें"),
    (K::Login, "लॉगिन"),
    (K::Username, "उपयोगकर्ता नाम/फोन/ईमेल"),
    (K::Password, "पासवर्ड"),
    (K::EnterUsername, "उपयोगकर्ता नाम, फोन या ईमेल दर्ज करें"),
    (K::EnterPassword, "अपना पासवर्ड दर्ज करें"),
    (K::ForgotPassword, "पासवर्ड भूल गए?"),
    (K::Help, "मदद"),
    (K::VerifyOtp, "OTP सत्यापित करें"),
    (K::LoginWithOtp, "OTP के साथ लॉगिन"),
    (K::EnterOtp, "अपने फोन पर भेजा गया OTP दर्ज करें"),
    (K::BackToPassword, "पासवर्ड लॉगिन पर वापस जाएं"),
    (K::OtpSent, "OTP आपके फोन पर भेज दिया गया है!"),
    (K::LoginFailed, "लॉगिन विफल रहा। कृपया अपना विवरण जांचें और पुनः प्रयास करें।"),
    (K::AdminLogin, "प्रशासक लॉगिन"),
    (K::FarmerLogin, "किसान लॉगिन"),
    (K::VisitorLogin, "आगंतुक लॉगिन"),
    (K::DashboardOverview, "डैशबोर्ड अवलोकन"),
    (K::AdminDashboard, "प्रशासक डैशबोर्ड"),
    (K::FarmerDashboard, "किसान डैशबोर्ड"),
    (K::VisitorDashboard, "आगंतुक डैशबोर्ड"),
    (K::AdminDescFull, "अपने कृषि पारिस्थितिकी तंत्र का प्रबंधन करें और सिस्टम प्रदर्शन की निगरानी करें"),
    (K::FarmerDescFull, "अपने फार्म के स्वास्थ्य, कार्यों और प्रदर्शन मेट्रिक्स की निगरानी करें"),
    (K::VisitorDescFull, "आस-पास के फार्म खोजें और बायोसेक्योरिटी प्रथाओं के बारे में जानें"),
    (K::FarmManagement, "फार्म प्रबंधन"),
    (K::ReportsAnalytics, "रिपोर्ट और एनालिटिक्स"),
    (K::Approvals, "अनुमोदन"),
    (K::TrainingModules, "प्रशिक्षण मॉड्यूल"),
    (K::MyFarm, "मेरा फार्म"),
    (K::DiseaseAlerts, "रोग अलर्ट"),
    (K::Training, "प्रशिक्षण"),
    (K::FarmPerformance, "फार्म प्रदर्शन"),
    (K::NearbyFarms, "आस-पास के फार्म"),
    (K::RiskAssessment, "जोखिम आकलन"),
    (K::LearningResources, "सीखने के संसाधन"),
    (K::FarmDirectory, "फार्म डायरेक्टरी"),
    (K::ManageAllFarms, "सभी पंजीकृत फार्म प्रबंधित करें"),
    (K::ViewReports, "सिस्टम-व्यापी रिपोर्ट देखें"),
    (K::ReviewRequests, "अनुरोधों की समीक्षा और अनुमोदन करें"),
    (K::ManageContent, "सीखने की सामग्री प्रबंधित करें"),
    (K::ManageFarm, "अपने फार्म का विवरण प्रबंधित करें"),
    (K::LatestAlerts, "नवीनतम स्वास्थ्य सूचनाएं"),
    (K::AccessModules, "सीखने के मॉड्यूल तक पहुंचें"),
    (K::ViewMetrics, "अपने फार्म के मेट्रिक्स देखें"),
    (K::ExploreFarms, "स्थानीय फार्म खोजें"),
    (K::ViewScores, "फार्म जोखिम स्कोर देखें"),
    (K::EducationalContent, "शैक्षिक सामग्री तक पहुंचें"),
    (K::BrowseListings, "फार्म लिस्टिंग ब्राउज़ करें"),
    (K::QuickStats, "त्वरित आंकड़े"),
    (K::ActiveFarms, "सक्रिय फार्म"),
    (K::PendingTasks, "लंबित कार्य"),
    (K::NearbyFarmsCount, "आस-पास के फार्म"),
    (K::PendingApprovals, "लंबित अनुमोदन"),
    (K::ActiveAlerts, "सक्रिय अलर्ट"),
    (K::HighRiskFarms, "उच्च जोखिम फार्म"),
    (K::SystemHealth, "सिस्टम स्वास्थ्य"),
    (K::FarmHealthScore, "फार्म स्वास्थ्य स्कोर"),
    (K::AverageSafetyScore, "औसत सुरक्षा स्कोर"),
    (K::EmergencySupport, "आपातकालीन सहायता"),
    (K::DiseaseAlert, "रोग अलर्ट"),
    (K::VeterinaryEmergency, "पशु चिकित्सा आपातकाल"),
    (K::Available247, "फार्म आपातकाल के लिए 24/7 उपलब्ध"),
    (K::TechnicalSupport, "तकनीकी सहायता"),
    (K::Whatsapp, "व्हाट्सएप"),
    (K::MonSat, "सोम-शनि: सुबह 9 बजे - शाम 6 बजे"),
    (K::FarmerHelpline, "किसान हेल्पलाइन"),
    (K::Helpline, "हेल्पलाइन"),
    (K::TrainingSupport, "प्रशिक्षण सहायता"),
    (K::FreeServices, "मुफ्त प्रशिक्षण और परामर्श सेवाएं"),
    (K::NeedHelp, "मदद चाहिए?"),
    (K::Copyright, "© 2024 डिजिटल फार्म और बायोसेक्योरिटी प्रबंधन प्लेटफॉर्म"),
    (K::Ministry, "कृषि और किसान कल्याण मंत्रालय"),
    (K::Logout, "लॉगआउट"),
    (K::WelcomeBack, "स्वागत!"),
    (K::ChooseLanguage, "अपनी भाषा चुनें"),
];

// ==================== Marathi Strings ====================

pub const MARATHI: Entries = &[
    (K::Title, "डिजिटल फार्म आणि बायोसेक्युरिटी व्यवस्थापन प्लॅटफॉर्म"),
    (K::Subtitle, "स्मार्ट साधनांसह शेतकऱ्यांना सक्षम करणे"),
    (K::SelectRole, "सुरू ठेवण्यासाठी आपली भूमिका निवडा"),
    (K::Welcome, "परत स्वागत!"),
    (K::Admin, "प्रशासक"),
    (K::Farmer, "शेतकरी"),
    (K::Visitor, "भेट देणारा"),
    (K::AdminDesc, "फार्म, मान्यता आणि अहवाल व्यवस्थापित करा"),
    (K::FarmerDesc, "कार्ये, सूचना आणि प्रशिक्षण मॉड्यूल"),
    (K::VisitorDesc, "फार्म व्यवस्थापनाबद्दल जाणून घ्या"),
    (K::Login, "लॉगिन"),
    (K::Username, "वापरकर्ता नाव/फोन/ईमेल"),
    (K::Password, "पासवर्ड"),
    (K::EnterUsername, "वापरकर्ता नाव, फोन किंवा ईमेल प्रविष्ट करा"),
    (K::EnterPassword, "आपला पासवर्ड प्रविष्ट करा"),
    (K::ForgotPassword, "पासवर्ड विसरलात?"),
    (K::Help, "मदत"),
    (K::VerifyOtp, "OTP सत्यापित करा"),
    (K::LoginWithOtp, "OTP सह लॉगिन"),
    (K::EnterOtp, "आपल्या फोनवर पाठवलेला OTP प्रविष्ट करा"),
    (K::BackToPassword, "पासवर्ड लॉगिनवर परत जा"),
    (K::OtpSent, "OTP आपल्या फोनवर पाठवला आहे!"),
    (K::LoginFailed, "लॉगिन अयशस्वी झाले. कृपया आपली माहिती तपासा आणि पुन्हा प्रयत्न करा."),
    (K::AdminLogin, "प्रशासक लॉगिन"),
    (K::FarmerLogin, "शेतकरी लॉगिन"),
    (K::VisitorLogin, "भेट देणारा लॉगिन"),
    (K::DashboardOverview, "डॅशबोर्ड अवलोकन"),
    (K::AdminDashboard, "प्रशासक डॅशबोर्ड"),
    (K::FarmerDashboard, "शेतकरी डॅशबोर्ड"),
    (K::VisitorDashboard, "भेट देणारा डॅशबोर्ड"),
    (K::AdminDescFull, "आपल्या शेतीच्या इकोसिस्टमचे व्यवस्थापन करा आणि सिस्टम कार्यप्रदर्शनाचे निरीक्षण करा"),
    (K::FarmerDescFull, "आपल्या फार्मच्या आरोग्याचे, कार्यांचे आणि कार्यप्रदर्शन मेट्रिक्सचे निरीक्षण करा"),
    (K::VisitorDescFull, "जवळच्या फार्म शोधा आणि बायोसेक्युरिटी पद्धतींबद्दल जाणून घ्या"),
    (K::FarmManagement, "फार्म व्यवस्थापन"),
    (K::ReportsAnalytics, "अहवाल आणि विश्लेषण"),
    (K::Approvals, "मान्यता"),
    (K::TrainingModules, "प्रशिक्षण मॉड्यूल"),
    (K::MyFarm, "माझा फार्म"),
    (K::DiseaseAlerts, "रोग सूचना"),
    (K::Training, "प्रशिक्षण"),
    (K::FarmPerformance, "फार्म कार्यप्रदर्शन"),
    (K::NearbyFarms, "जवळचे फार्म"),
    (K::RiskAssessment, "जोखीम मूल्यांकन"),
    (K::LearningResources, "शिकण्याचे स्रोत"),
    (K::FarmDirectory, "फार्म डिरेक्टरी"),
    (K::ManageAllFarms, "सर्व नोंदणीकृत फार्म व्यवस्थापित करा"),
    (K::ViewReports, "सिस्टमव्यापी अहवाल पहा"),
    (K::ReviewRequests, "विनंत्या पाहून आणि मान्य करा"),
    (K::ManageContent, "शिकण्याची सामग्री व्यवस्थापित करा"),
    (K::ManageFarm, "आपल्या फार्मचे तपशील व्यवस्थापित करा"),
    (K::LatestAlerts, "ताज्या आरोग्य सूचना"),
    (K::AccessModules, "शिकण्याचे मॉड्यूल वापरा"),
    (K::ViewMetrics, "आपल्या फार्मचे मेट्रिक्स पहा"),
    (K::ExploreFarms, "स्थानिक फार्म शोधा"),
    (K::ViewScores, "फार्म जोखीम स्कोअर पहा"),
    (K::EducationalContent, "शैक्षणिक सामग्री वापरा"),
    (K::BrowseListings, "फार्म सूची ब्राउझ करा"),
    (K::QuickStats, "जलद आकडेवारी"),
    (K::ActiveFarms, "सक्रिय फार्म"),
    (K::PendingTasks, "प्रलंबित कार्ये"),
    (K::NearbyFarmsCount, "जवळचे फार्म"),
    (K::PendingApprovals, "प्रलंबित मान्यता"),
    (K::ActiveAlerts, "सक्रिय सूचना"),
    (K::HighRiskFarms, "उच्च जोखीम फार्म"),
    (K::SystemHealth, "सिस्टम आरोग्य"),
    (K::FarmHealthScore, "फार्म आरोग्य स्कोअर"),
    (K::AverageSafetyScore, "सरासरी सुरक्षा स्कोअर"),
    (K::EmergencySupport, "आपत्कालीन मदत"),
    (K::DiseaseAlert, "रोग सूचना"),
    (K::VeterinaryEmergency, "पशुवैद्यकी आपत्काल"),
    (K::Available247, "फार्म आपत्कालांसाठी 24/7 उपलब्ध"),
    (K::TechnicalSupport, "तांत्रिक मदत"),
    (K::Whatsapp, "व्हॉट्सअॅप"),
    (K::MonSat, "सोम-शनि: सकाळी 9 - संध्याकाळी 6"),
    (K::FarmerHelpline, "शेतकरी हेल्पलाइन"),
    (K::Helpline, "हेल्पलाइन"),
    (K::TrainingSupport, "प्रशिक्षण मदत"),
    (K::FreeServices, "विनामूल्य प्रशिक्षण आणि सल्ला सेवा"),
    (K::NeedHelp, "मदत हवी?"),
    (K::Copyright, "© 2024 डिजिटल फार्म आणि बायोसेक्युरिटी व्यवस्थापन प्लॅटफॉर्म"),
    (K::Ministry, "कृषी आणि शेतकरी कल्याण मंत्रालय"),
    (K::Logout, "लॉगआउट"),
    (K::WelcomeBack, "स्वागत!"),
    (K::ChooseLanguage, "आपली भाषा निवडा"),
];

// ==================== Gujarati Strings ====================

pub const GUJARATI: Entries = &[
    (K::Title, "ડિજિટલ ફાર્મ અને બાયોસિક્યોરિટી મેનેજમેન્ટ પ્લેટફોર્મ"),
    (K::Subtitle, "સ્માર્ટ ટૂલ્સ સાથે ખેડૂતોને સશક્ત બનાવવું"),
    (K::SelectRole, "ચાલુ રાખવા માટે તમારી ભૂમિકા પસંદ કરો"),
    (K::Welcome, "ફરી સ્વાગત છે!"),
    (K::Admin, "વહીવટકર્તા"),
    (K::Farmer, "ખેડૂત"),
    (K::Visitor, "મુલાકાતી"),
    (K::AdminDesc, "ફાર્મ, મંજૂરીઓ અને અહેવાલોનું સંચાલન કરો"),
    (K::FarmerDesc, "કાર્યો, ચેતવણીઓ અને તાલીમ મોડ્યુલો"),
    (K::VisitorDesc, "ફાર્મ મેનેજમેન્ટ વિશે શીખો"),
    (K::Login, "લૉગિન"),
    (K::Username, "વપરાશકર્તા નામ/ફોન/ઈમેલ"),
    (K::Password, "પાસવર્ડ"),
    (K::EnterUsername, "વપરાશકર્તા નામ, ફોન અથવા ઈમેલ દાખલ કરો"),
    (K::EnterPassword, "તમારો પાસવર્ડ દાખલ કરો"),
    (K::ForgotPassword, "પાસવર્ડ ભૂલી ગયા છો?"),
    (K::Help, "મદદ"),
    (K::VerifyOtp, "OTP ચકાસો"),
    (K::LoginWithOtp, "OTP સાથે લૉગિન કરો"),
    (K::EnterOtp, "તમારા ફોન પર મોકલેલ OTP દાખલ કરો"),
    (K::BackToPassword, "પાસવર્ડ લૉગિન પર પાછા જાઓ"),
    (K::OtpSent, "OTP તમારા ફોન પર મોકલવામાં આવ્યો છે!"),
    (K::LoginFailed, "લૉગિન નિષ્ફળ ગયું. કૃપા કરીને તમારી વિગતો તપાસો અને ફરી પ્રયાસ કરો."),
    (K::AdminLogin, "વહીવટકર્તા લૉગિન"),
    (K::FarmerLogin, "ખેડૂત લૉગિન"),
    (K::VisitorLogin, "મુલાકાતી લૉગિન"),
    (K::DashboardOverview, "ડેશબોર્ડ અવલોકન"),
    (K::AdminDashboard, "વહીવટકર્તા ડેશબોર્ડ"),
    (K::FarmerDashboard, "ખેડૂત ડેશબોર્ડ"),
    (K::VisitorDashboard, "મુલાકાતી ડેશબોર્ડ"),
    (K::AdminDescFull, "તમારા ખેતી પર્યાવરણનું સંચાલન કરો અને સિસ્ટમના પ્રદર્શનનું નિરીક્ષણ કરો"),
    (K::FarmerDescFull, "તમારા ફાર્મના આરોગ્ય, કાર્યો અને પ્રદર્શન મેટ્રિક્સનું નિરીક્ષણ કરો"),
    (K::VisitorDescFull, "નજીકના ફાર્મ શોધો અને બાયોસિક્યોરિટી પદ્ધતિઓ વિશે શીખો"),
    (K::FarmManagement, "ફાર્મ મેનેજમેન્ટ"),
    (K::ReportsAnalytics, "અહેવાલો અને વિશ્લેષણ"),
    (K::Approvals, "મંજૂરીઓ"),
    (K::TrainingModules, "તાલીમ મોડ્યુલો"),
    (K::MyFarm, "મારો ફાર્મ"),
    (K::DiseaseAlerts, "રોગ ચેતવણીઓ"),
    (K::Training, "તાલીમ"),
    (K::FarmPerformance, "ફાર્મ પ્રદર્શન"),
    (K::NearbyFarms, "નજીકના ફાર્મ"),
    (K::RiskAssessment, "જોખમ મૂલ્યાંકન"),
    (K::LearningResources, "શિક્ષણ સંસાધનો"),
    (K::FarmDirectory, "ફાર્મ ડિરેક્ટરી"),
    (K::ManageAllFarms, "બધા નોંધાયેલા ફાર્મનું સંચાલન કરો"),
    (K::ViewReports, "સિસ્ટમવ્યાપી અહેવાલો જુઓ"),
    (K::ReviewRequests, "વિનંતીઓની સમીક્ષા અને મંજૂરી કરો"),
    (K::ManageContent, "શિક્ષણ સામગ્રીનું સંચાલન કરો"),
    (K::ManageFarm, "તમારા ફાર્મની વિગતો સંચાલિત કરો"),
    (K::LatestAlerts, "નવીનતમ આરોગ્ય સૂચનાઓ"),
    (K::AccessModules, "શિક્ષણ મોડ્યુલો ઍક્સેસ કરો"),
    (K::ViewMetrics, "તમારા ફાર્મના મેટ્રિક્સ જુઓ"),
    (K::ExploreFarms, "સ્થાનિક ફાર્મ શોધો"),
    (K::ViewScores, "ફાર્મ જોખમ સ્કોર જુઓ"),
    (K::EducationalContent, "શૈક્ષણિક સામગ્રી ઍક્સેસ કરો"),
    (K::BrowseListings, "ફાર્મ સૂચિઓ બ્રાઉઝ કરો"),
    (K::QuickStats, "ઝડપી આંકડા"),
    (K::ActiveFarms, "સક્રિય ફાર્મ"),
    (K::PendingTasks, "બાકી કાર્યો"),
    (K::NearbyFarmsCount, "નજીકના ફાર્મ"),
    (K::PendingApprovals, "બાકી મંજૂરીઓ"),
    (K::ActiveAlerts, "સક્રિય ચેતવણીઓ"),
    (K::HighRiskFarms, "ઉચ્ચ જોખમ ફાર્મ"),
    (K::SystemHealth, "સિસ્ટમ આરોગ્ય"),
    (K::FarmHealthScore, "ફાર્મ આરોગ્ય સ્કોર"),
    (K::AverageSafetyScore, "સરેરાશ સલામતી સ્કોર"),
    (K::EmergencySupport, "કટોકટી સહાય"),
    (K::DiseaseAlert, "રોગ ચેતવણી"),
    (K::VeterinaryEmergency, "પશુ ડૉક્ટર કટોકટી"),
    (K::Available247, "ફાર્મ કટોકટી માટે 24/7 ઉપલબ્ધ"),
    (K::TechnicalSupport, "તકનીકી સહાય"),
    (K::Whatsapp, "વ્હોટ્સએપ"),
    (K::MonSat, "સોમ-શનિ: સવારે 9 - સાંજે 6"),
    (K::FarmerHelpline, "ખેડૂત હેલ્પલાઇન"),
    (K::Helpline, "હેલ્પલાઇન"),
    (K::TrainingSupport, "તાલીમ સહાય"),
    (K::FreeServices, "મફત તાલીમ અને સલાહ સેવાઓ"),
    (K::NeedHelp, "મદદ જોઈએ?"),
    (K::Copyright, "© 2024 ડિજિટલ ફાર્મ અને બાયોસિક્યોરિટી મેનેજમેન્ટ પ્લેટફોર્મ"),
    (K::Ministry, "કૃષિ અને ખેડૂત કલ્યાણ મંત્રાલય"),
    (K::Logout, "લૉગઆઉટ"),
    (K::WelcomeBack, "સ્વાગત છે!"),
    (K::ChooseLanguage, "તમારી ભાષા પસંદ કરો"),
];

// ==================== Tamil Strings ====================

pub const TAMIL: Entries = &[
    (K::Title, "டிஜிட்டல் பண்ணை மற்றும் உயிர்பாதுகாப்பு மேலாண்மை தளம்"),
    (K::Subtitle, "புத்திசாலித்தனமான கருவிகளுடன் விவசாயிகளை மேம்படுத்துதல்"),
    (K::SelectRole, "தொடர்வதற்கு உங்கள் பங்கைத் தேர்ந்தெடுக்கவும்"),
    (K::Welcome, "மீண்டும் வருக!"),
    (K::Admin, "நிர்வாகி"),
    (K::Farmer, "விவசாயி"),
    (K::Visitor, "பார்வையாளர்"),
    (K::AdminDesc, "பண்ணைகள், ஒப்புதல்கள் மற்றும் அறிக்கைகளை நிர்வகிக்கவும்"),
    (K::FarmerDesc, "பணிகள், எச்சரிக்கைகள் மற்றும் பயிற்சி தொகுதிகள்"),
    (K::VisitorDesc, "பண்ணை மேலாண்மை பற்றி கற்கவும்"),
    (K::Login, "உள்நுழைவு"),
    (K::Username, "பயனர்பெயர்/தொலைபேசி/மின்னஞ்சல்"),
    (K::Password, "கடவுச்சொல்"),
    (K::EnterUsername, "பயனர்பெயர், தொலைபேசி அல்லது மின்னஞ்சலை உள்ளீடு செய்யவும்"),
    (K::EnterPassword, "உங்கள் கடவுச்சொல்லை உள்ளீடு செய்யவும்"),
    (K::ForgotPassword, "கடவுச்சொல்லை மறந்துவிட்டீர்களா?"),
    (K::Help, "உதவி"),
    (K::VerifyOtp, "OTP ஐ சரிபார்க்கவும்"),
    (K::LoginWithOtp, "OTP உடன் உள்நுழைவு"),
    (K::EnterOtp, "உங்கள் தொலைபேசிக்கு அனுப்பப்பட்ட OTP ஐ உள்ளீடு செய்யவும்"),
    (K::BackToPassword, "கடவுச்சொல் உள்நுழைவுக்கு திரும்பு"),
    (K::OtpSent, "OTP உங்கள் தொலைபேசிக்கு அனுப்பப்பட்டது!"),
    (K::LoginFailed, "உள்நுழைவு தோல்வியடைந்தது. உங்கள் விவரங்களைச் சரிபார்த்து மீண்டும் முயற்சிக்கவும்."),
    (K::AdminLogin, "நிர்வாகி உள்நுழைவு"),
    (K::FarmerLogin, "விவசாயி உள்நுழைவு"),
    (K::VisitorLogin, "பார்வையாளர் உள்நுழைவு"),
    (K::DashboardOverview, "டாஷ்போர்டு கண்ணோட்டம்"),
    (K::AdminDashboard, "நிர்வாகி டாஷ்போர்டு"),
    (K::FarmerDashboard, "விவசாயி டாஷ்போர்டு"),
    (K::VisitorDashboard, "பார்வையாளர் டாஷ்போர்டு"),
    (K::AdminDescFull, "உங்கள் விவசாய சுற்றுச்சூழலை நிர்வகித்து அமைப்பு செயல்திறனை கண்காணிக்கவும்"),
    (K::FarmerDescFull, "உங்கள் பண்ணை ஆரோக்கியம், பணிகள் மற்றும் செயல்திறன் அளவீடுகளை கண்காணிக்கவும்"),
    (K::VisitorDescFull, "அருகிலுள்ள பண்ணைகளை ஆராய்ந்து உயிர்பாதுகாப்பு நடைமுறைகளை கற்கவும்"),
    (K::FarmManagement, "பண்ணை மேலாண்மை"),
    (K::ReportsAnalytics, "அறிக்கைகள் மற்றும் பகுப்பாய்வு"),
    (K::Approvals, "ஒப்புதல்கள்"),
    (K::TrainingModules, "பயிற்சி தொகுதிகள்"),
    (K::MyFarm, "எனது பண்ணை"),
    (K::DiseaseAlerts, "நோய் எச்சரிக்கைகள்"),
    (K::Training, "பயிற்சி"),
    (K::FarmPerformance, "பண்ணை செயல்திறன்"),
    (K::NearbyFarms, "அருகிலுள்ள பண்ணைகள்"),
    (K::RiskAssessment, "ஆபத்து மதிப்பீடு"),
    (K::LearningResources, "கற்றல் வளங்கள்"),
    (K::FarmDirectory, "பண்ணை அடைவு"),
    (K::ManageAllFarms, "அனைத்து பதிவுசெய்யப்பட்ட பண்ணைகளையும் நிர்வகிக்கவும்"),
    (K::ViewReports, "அமைப்பு அளவிலான அறிக்கைகளை பார்க்கவும்"),
    (K::ReviewRequests, "கோரிக்கைகளை மறுபரிசீலனை செய்து ஒப்புதல் அளிக்கவும்"),
    (K::ManageContent, "கற்றல் உள்ளடக்கத்தை நிர்வகிக்கவும்"),
    (K::ManageFarm, "உங்கள் பண்ணை விவரங்களை நிர்வகிக்கவும்"),
    (K::LatestAlerts, "சமீபத்திய ஆரோக்கிய அறிவிப்புகள்"),
    (K::AccessModules, "கற்றல் தொகுதிகளை அணுகவும்"),
    (K::ViewMetrics, "உங்கள் பண்ணை அளவீடுகளை பார்க்கவும்"),
    (K::ExploreFarms, "உள்ளூர்ப் பண்ணைகளை ஆராயவும்"),
    (K::ViewScores, "பண்ணை ஆபத்து மதிப்பெண்களை பார்க்கவும்"),
    (K::EducationalContent, "கல்வி உள்ளடக்கத்தை அணுகவும்"),
    (K::BrowseListings, "பண்ணை பட்டியல்களை உலாவவும்"),
    (K::QuickStats, "விரைவு புள்ளியியல்"),
    (K::ActiveFarms, "செயலில் உள்ள பண்ணைகள்"),
    (K::PendingTasks, "நிலுவையில் உள்ள பணிகள்"),
    (K::NearbyFarmsCount, "அருகிலுள்ள பண்ணைகள்"),
    (K::PendingApprovals, "நிலுவையில் உள்ள ஒப்புதல்கள்"),
    (K::ActiveAlerts, "செயலில் உள்ள எச்சரிக்கைகள்"),
    (K::HighRiskFarms, "உயர் ஆபத்து பண்ணைகள்"),
    (K::SystemHealth, "அமைப்பு ஆரோக்கியம்"),
    (K::FarmHealthScore, "பண்ணை ஆரோக்கிய மதிப்பெண்"),
    (K::AverageSafetyScore, "சராசரி பாதுகாப்பு மதிப்பெண்"),
    (K::EmergencySupport, "அவசர உதவி"),
    (K::DiseaseAlert, "நோய் எச்சரிக்கை"),
    (K::VeterinaryEmergency, "மருத்துவ அவசரநிலை"),
    (K::Available247, "பண்ணை அவசரநிலைகளுக்கு 24/7 கிடைக்கும்"),
    (K::TechnicalSupport, "தொழில்நுட்ப உதவி"),
    (K::Whatsapp, "வாட்ஸ்அப்"),
    (K::MonSat, "திங்கள்-சனி: காலை 9 - மாலை 6"),
    (K::FarmerHelpline, "விவசாயி உதவி எண்"),
    (K::Helpline, "உதவி எண்"),
    (K::TrainingSupport, "பயிற்சி உதவி"),
    (K::FreeServices, "இலவச பயிற்சி மற்றும் ஆலோசனை சேவைகள்"),
    (K::NeedHelp, "உதவி தேவையா?"),
    (K::Copyright, "© 2024 டிஜிட்டல் பண்ணை மற்றும் உயிர்பாதுகாப்பு மேலாண்மை தளம்"),
    (K::Ministry, "விவசாயம் மற்றும் விவசாயிகள் நலன் துறை"),
    (K::Logout, "வெளியேறு"),
    (K::WelcomeBack, "வருக!"),
    (K::ChooseLanguage, "உங்கள் மொழியைத் தேர்ந்தெடுக்கவும்"),
];
