//! Data element tag declarations
//!
//! Attributes of the DICOM standard registry, PS3.6,
//! with their typical value representation and value multiplicity.
//! Generated with `dicom-value-dictionary-builder data-element`.
//! Repeating group attributes `(ggxx,eeee)` have the `xx` portion zeroed.

use dicom_value_core::dictionary::{DataDictionaryEntryRef, TagRange::*, VirtualVr::*};
use dicom_value_core::Tag;
use dicom_value_core::VR::*;

/// CommandGroupLength (0000,0000) UL 1
#[rustfmt::skip]
pub const COMMAND_GROUP_LENGTH: Tag = Tag(0x0000, 0x0000);
/// CommandLengthToEnd (0000,0001) UL 1
#[rustfmt::skip]
pub const COMMAND_LENGTH_TO_END: Tag = Tag(0x0000, 0x0001);
/// AffectedSOPClassUID (0000,0002) UI 1
#[rustfmt::skip]
pub const AFFECTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0002);
/// RequestedSOPClassUID (0000,0003) UI 1
#[rustfmt::skip]
pub const REQUESTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0003);
/// CommandRecognitionCode (0000,0010) SH 1
#[rustfmt::skip]
pub const COMMAND_RECOGNITION_CODE: Tag = Tag(0x0000, 0x0010);
/// CommandField (0000,0100) US 1
#[rustfmt::skip]
pub const COMMAND_FIELD: Tag = Tag(0x0000, 0x0100);
/// MessageID (0000,0110) US 1
#[rustfmt::skip]
pub const MESSAGE_ID: Tag = Tag(0x0000, 0x0110);
/// MessageIDBeingRespondedTo (0000,0120) US 1
#[rustfmt::skip]
pub const MESSAGE_ID_BEING_RESPONDED_TO: Tag = Tag(0x0000, 0x0120);
/// Initiator (0000,0200) AE 1
#[rustfmt::skip]
pub const INITIATOR: Tag = Tag(0x0000, 0x0200);
/// Receiver (0000,0300) AE 1
#[rustfmt::skip]
pub const RECEIVER: Tag = Tag(0x0000, 0x0300);
/// FindLocation (0000,0400) AE 1
#[rustfmt::skip]
pub const FIND_LOCATION: Tag = Tag(0x0000, 0x0400);
/// MoveDestination (0000,0600) AE 1
#[rustfmt::skip]
pub const MOVE_DESTINATION: Tag = Tag(0x0000, 0x0600);
/// Priority (0000,0700) US 1
#[rustfmt::skip]
pub const PRIORITY: Tag = Tag(0x0000, 0x0700);
/// CommandDataSetType (0000,0800) US 1
#[rustfmt::skip]
pub const COMMAND_DATA_SET_TYPE: Tag = Tag(0x0000, 0x0800);
/// NumberOfMatches (0000,0850) US 1
#[rustfmt::skip]
pub const NUMBER_OF_MATCHES: Tag = Tag(0x0000, 0x0850);
/// ResponseSequenceNumber (0000,0860) US 1
#[rustfmt::skip]
pub const RESPONSE_SEQUENCE_NUMBER: Tag = Tag(0x0000, 0x0860);
/// Status (0000,0900) US 1
#[rustfmt::skip]
pub const STATUS: Tag = Tag(0x0000, 0x0900);
/// OffendingElement (0000,0901) AT 1-n
#[rustfmt::skip]
pub const OFFENDING_ELEMENT: Tag = Tag(0x0000, 0x0901);
/// ErrorComment (0000,0902) LO 1
#[rustfmt::skip]
pub const ERROR_COMMENT: Tag = Tag(0x0000, 0x0902);
/// ErrorID (0000,0903) US 1
#[rustfmt::skip]
pub const ERROR_ID: Tag = Tag(0x0000, 0x0903);
/// AffectedSOPInstanceUID (0000,1000) UI 1
#[rustfmt::skip]
pub const AFFECTED_SOP_INSTANCE_UID: Tag = Tag(0x0000, 0x1000);
/// RequestedSOPInstanceUID (0000,1001) UI 1
#[rustfmt::skip]
pub const REQUESTED_SOP_INSTANCE_UID: Tag = Tag(0x0000, 0x1001);
/// EventTypeID (0000,1002) US 1
#[rustfmt::skip]
pub const EVENT_TYPE_ID: Tag = Tag(0x0000, 0x1002);
/// AttributeIdentifierList (0000,1005) AT 1-n
#[rustfmt::skip]
pub const ATTRIBUTE_IDENTIFIER_LIST: Tag = Tag(0x0000, 0x1005);
/// ActionTypeID (0000,1008) US 1
#[rustfmt::skip]
pub const ACTION_TYPE_ID: Tag = Tag(0x0000, 0x1008);
/// NumberOfRemainingSuboperations (0000,1020) US 1
#[rustfmt::skip]
pub const NUMBER_OF_REMAINING_SUBOPERATIONS: Tag = Tag(0x0000, 0x1020);
/// NumberOfCompletedSuboperations (0000,1021) US 1
#[rustfmt::skip]
pub const NUMBER_OF_COMPLETED_SUBOPERATIONS: Tag = Tag(0x0000, 0x1021);
/// NumberOfFailedSuboperations (0000,1022) US 1
#[rustfmt::skip]
pub const NUMBER_OF_FAILED_SUBOPERATIONS: Tag = Tag(0x0000, 0x1022);
/// NumberOfWarningSuboperations (0000,1023) US 1
#[rustfmt::skip]
pub const NUMBER_OF_WARNING_SUBOPERATIONS: Tag = Tag(0x0000, 0x1023);
/// MoveOriginatorApplicationEntityTitle (0000,1030) AE 1
#[rustfmt::skip]
pub const MOVE_ORIGINATOR_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0000, 0x1030);
/// MoveOriginatorMessageID (0000,1031) US 1
#[rustfmt::skip]
pub const MOVE_ORIGINATOR_MESSAGE_ID: Tag = Tag(0x0000, 0x1031);
/// FileMetaInformationGroupLength (0002,0000) UL 1
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB 1
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI 1
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI 1
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI 1
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI 1
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH 1
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016) AE 1
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// SendingApplicationEntityTitle (0002,0017) AE 1
#[rustfmt::skip]
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// ReceivingApplicationEntityTitle (0002,0018) AE 1
#[rustfmt::skip]
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
/// SourcePresentationAddress (0002,0026) UR 1
#[rustfmt::skip]
pub const SOURCE_PRESENTATION_ADDRESS: Tag = Tag(0x0002, 0x0026);
/// SendingPresentationAddress (0002,0027) UR 1
#[rustfmt::skip]
pub const SENDING_PRESENTATION_ADDRESS: Tag = Tag(0x0002, 0x0027);
/// ReceivingPresentationAddress (0002,0028) UR 1
#[rustfmt::skip]
pub const RECEIVING_PRESENTATION_ADDRESS: Tag = Tag(0x0002, 0x0028);
/// RTVMetaInformationVersion (0002,0031) OB 1
#[rustfmt::skip]
pub const RTV_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0031);
/// RTVCommunicationSOPClassUID (0002,0032) UI 1
#[rustfmt::skip]
pub const RTV_COMMUNICATION_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0032);
/// RTVCommunicationSOPInstanceUID (0002,0033) UI 1
#[rustfmt::skip]
pub const RTV_COMMUNICATION_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0033);
/// RTVSourceIdentifier (0002,0035) OB 1
#[rustfmt::skip]
pub const RTV_SOURCE_IDENTIFIER: Tag = Tag(0x0002, 0x0035);
/// RTVFlowIdentifier (0002,0036) OB 1
#[rustfmt::skip]
pub const RTV_FLOW_IDENTIFIER: Tag = Tag(0x0002, 0x0036);
/// RTVFlowRTPSamplingRate (0002,0037) UL 1
#[rustfmt::skip]
pub const RTV_FLOW_RTP_SAMPLING_RATE: Tag = Tag(0x0002, 0x0037);
/// RTVFlowActualFrameDuration (0002,0038) FD 1
#[rustfmt::skip]
pub const RTV_FLOW_ACTUAL_FRAME_DURATION: Tag = Tag(0x0002, 0x0038);
/// PrivateInformationCreatorUID (0002,0100) UI 1
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// PrivateInformation (0002,0102) OB 1
#[rustfmt::skip]
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// FileSetID (0004,1130) CS 1
#[rustfmt::skip]
pub const FILE_SET_ID: Tag = Tag(0x0004, 0x1130);
/// FileSetDescriptorFileID (0004,1141) CS 1-8
#[rustfmt::skip]
pub const FILE_SET_DESCRIPTOR_FILE_ID: Tag = Tag(0x0004, 0x1141);
/// SpecificCharacterSetOfFileSetDescriptorFile (0004,1142) CS 1
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET_OF_FILE_SET_DESCRIPTOR_FILE: Tag = Tag(0x0004, 0x1142);
/// OffsetOfTheFirstDirectoryRecordOfTheRootDirectoryEntity (0004,1200) UL 1
#[rustfmt::skip]
pub const OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1200);
/// OffsetOfTheLastDirectoryRecordOfTheRootDirectoryEntity (0004,1202) UL 1
#[rustfmt::skip]
pub const OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1202);
/// FileSetConsistencyFlag (0004,1212) US 1
#[rustfmt::skip]
pub const FILE_SET_CONSISTENCY_FLAG: Tag = Tag(0x0004, 0x1212);
/// DirectoryRecordSequence (0004,1220) SQ 1
#[rustfmt::skip]
pub const DIRECTORY_RECORD_SEQUENCE: Tag = Tag(0x0004, 0x1220);
/// OffsetOfTheNextDirectoryRecord (0004,1400) UL 1
#[rustfmt::skip]
pub const OFFSET_OF_THE_NEXT_DIRECTORY_RECORD: Tag = Tag(0x0004, 0x1400);
/// RecordInUseFlag (0004,1410) US 1
#[rustfmt::skip]
pub const RECORD_IN_USE_FLAG: Tag = Tag(0x0004, 0x1410);
/// OffsetOfReferencedLowerLevelDirectoryEntity (0004,1420) UL 1
#[rustfmt::skip]
pub const OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1420);
/// DirectoryRecordType (0004,1430) CS 1
#[rustfmt::skip]
pub const DIRECTORY_RECORD_TYPE: Tag = Tag(0x0004, 0x1430);
/// PrivateRecordUID (0004,1432) UI 1
#[rustfmt::skip]
pub const PRIVATE_RECORD_UID: Tag = Tag(0x0004, 0x1432);
/// ReferencedFileID (0004,1500) CS 1-8
#[rustfmt::skip]
pub const REFERENCED_FILE_ID: Tag = Tag(0x0004, 0x1500);
/// MRDRDirectoryRecordOffset (0004,1504) UL 1
#[rustfmt::skip]
pub const MRDR_DIRECTORY_RECORD_OFFSET: Tag = Tag(0x0004, 0x1504);
/// ReferencedSOPClassUIDInFile (0004,1510) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID_IN_FILE: Tag = Tag(0x0004, 0x1510);
/// ReferencedSOPInstanceUIDInFile (0004,1511) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID_IN_FILE: Tag = Tag(0x0004, 0x1511);
/// ReferencedTransferSyntaxUIDInFile (0004,1512) UI 1
#[rustfmt::skip]
pub const REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE: Tag = Tag(0x0004, 0x1512);
/// ReferencedRelatedGeneralSOPClassUIDInFile (0004,151A) UI 1-n
#[rustfmt::skip]
pub const REFERENCED_RELATED_GENERAL_SOP_CLASS_UID_IN_FILE: Tag = Tag(0x0004, 0x151A);
/// NumberOfReferences (0004,1600) UL 1
#[rustfmt::skip]
pub const NUMBER_OF_REFERENCES: Tag = Tag(0x0004, 0x1600);
/// LengthToEnd (0008,0001) UL 1
#[rustfmt::skip]
pub const LENGTH_TO_END: Tag = Tag(0x0008, 0x0001);
/// SpecificCharacterSet (0008,0005) CS 1-n
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// LanguageCodeSequence (0008,0006) SQ 1
#[rustfmt::skip]
pub const LANGUAGE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0006);
/// ImageType (0008,0008) CS 2-n
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// RecognitionCode (0008,0010) SH 1
#[rustfmt::skip]
pub const RECOGNITION_CODE: Tag = Tag(0x0008, 0x0010);
/// InstanceCreationDate (0008,0012) DA 1
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime (0008,0013) TM 1
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// InstanceCreatorUID (0008,0014) UI 1
#[rustfmt::skip]
pub const INSTANCE_CREATOR_UID: Tag = Tag(0x0008, 0x0014);
/// InstanceCoercionDateTime (0008,0015) DT 1
#[rustfmt::skip]
pub const INSTANCE_COERCION_DATE_TIME: Tag = Tag(0x0008, 0x0015);
/// SOPClassUID (0008,0016) UI 1
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// AcquisitionUID (0008,0017) UI 1
#[rustfmt::skip]
pub const ACQUISITION_UID: Tag = Tag(0x0008, 0x0017);
/// SOPInstanceUID (0008,0018) UI 1
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// PyramidUID (0008,0019) UI 1
#[rustfmt::skip]
pub const PYRAMID_UID: Tag = Tag(0x0008, 0x0019);
/// RelatedGeneralSOPClassUID (0008,001A) UI 1-n
#[rustfmt::skip]
pub const RELATED_GENERAL_SOP_CLASS_UID: Tag = Tag(0x0008, 0x001A);
/// OriginalSpecializedSOPClassUID (0008,001B) UI 1
#[rustfmt::skip]
pub const ORIGINAL_SPECIALIZED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x001B);
/// StudyDate (0008,0020) DA 1
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA 1
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate (0008,0022) DA 1
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate (0008,0023) DA 1
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// OverlayDate (0008,0024) DA 1
#[rustfmt::skip]
pub const OVERLAY_DATE: Tag = Tag(0x0008, 0x0024);
/// CurveDate (0008,0025) DA 1
#[rustfmt::skip]
pub const CURVE_DATE: Tag = Tag(0x0008, 0x0025);
/// AcquisitionDateTime (0008,002A) DT 1
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// StudyTime (0008,0030) TM 1
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM 1
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime (0008,0032) TM 1
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// ContentTime (0008,0033) TM 1
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// OverlayTime (0008,0034) TM 1
#[rustfmt::skip]
pub const OVERLAY_TIME: Tag = Tag(0x0008, 0x0034);
/// CurveTime (0008,0035) TM 1
#[rustfmt::skip]
pub const CURVE_TIME: Tag = Tag(0x0008, 0x0035);
/// DataSetType (0008,0040) US 1
#[rustfmt::skip]
pub const DATA_SET_TYPE: Tag = Tag(0x0008, 0x0040);
/// DataSetSubtype (0008,0041) LO 1
#[rustfmt::skip]
pub const DATA_SET_SUBTYPE: Tag = Tag(0x0008, 0x0041);
/// NuclearMedicineSeriesType (0008,0042) CS 1
#[rustfmt::skip]
pub const NUCLEAR_MEDICINE_SERIES_TYPE: Tag = Tag(0x0008, 0x0042);
/// AccessionNumber (0008,0050) SH 1
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// IssuerOfAccessionNumberSequence (0008,0051) SQ 1
#[rustfmt::skip]
pub const ISSUER_OF_ACCESSION_NUMBER_SEQUENCE: Tag = Tag(0x0008, 0x0051);
/// QueryRetrieveLevel (0008,0052) CS 1
#[rustfmt::skip]
pub const QUERY_RETRIEVE_LEVEL: Tag = Tag(0x0008, 0x0052);
/// QueryRetrieveView (0008,0053) CS 1
#[rustfmt::skip]
pub const QUERY_RETRIEVE_VIEW: Tag = Tag(0x0008, 0x0053);
/// RetrieveAETitle (0008,0054) AE 1-n
#[rustfmt::skip]
pub const RETRIEVE_AE_TITLE: Tag = Tag(0x0008, 0x0054);
/// StationAETitle (0008,0055) AE 1
#[rustfmt::skip]
pub const STATION_AE_TITLE: Tag = Tag(0x0008, 0x0055);
/// InstanceAvailability (0008,0056) CS 1
#[rustfmt::skip]
pub const INSTANCE_AVAILABILITY: Tag = Tag(0x0008, 0x0056);
/// FailedSOPInstanceUIDList (0008,0058) UI 1-n
#[rustfmt::skip]
pub const FAILED_SOP_INSTANCE_UID_LIST: Tag = Tag(0x0008, 0x0058);
/// Modality (0008,0060) CS 1
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// ModalitiesInStudy (0008,0061) CS 1-n
#[rustfmt::skip]
pub const MODALITIES_IN_STUDY: Tag = Tag(0x0008, 0x0061);
/// SOPClassesInStudy (0008,0062) UI 1-n
#[rustfmt::skip]
pub const SOP_CLASSES_IN_STUDY: Tag = Tag(0x0008, 0x0062);
/// AnatomicRegionsInStudyCodeSequence (0008,0063) SQ 1
#[rustfmt::skip]
pub const ANATOMIC_REGIONS_IN_STUDY_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0063);
/// ConversionType (0008,0064) CS 1
#[rustfmt::skip]
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// PresentationIntentType (0008,0068) CS 1
#[rustfmt::skip]
pub const PRESENTATION_INTENT_TYPE: Tag = Tag(0x0008, 0x0068);
/// Manufacturer (0008,0070) LO 1
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080) LO 1
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// InstitutionAddress (0008,0081) ST 1
#[rustfmt::skip]
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// InstitutionCodeSequence (0008,0082) SQ 1
#[rustfmt::skip]
pub const INSTITUTION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0082);
/// ReferringPhysicianName (0008,0090) PN 1
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// ReferringPhysicianAddress (0008,0092) ST 1
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_ADDRESS: Tag = Tag(0x0008, 0x0092);
/// ReferringPhysicianTelephoneNumbers (0008,0094) SH 1-n
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_TELEPHONE_NUMBERS: Tag = Tag(0x0008, 0x0094);
/// ReferringPhysicianIdentificationSequence (0008,0096) SQ 1
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0096);
/// ConsultingPhysicianName (0008,009C) PN 1-n
#[rustfmt::skip]
pub const CONSULTING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x009C);
/// ConsultingPhysicianIdentificationSequence (0008,009D) SQ 1
#[rustfmt::skip]
pub const CONSULTING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x009D);
/// CodeValue (0008,0100) SH 1
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// ExtendedCodeValue (0008,0101) LO 1
#[rustfmt::skip]
pub const EXTENDED_CODE_VALUE: Tag = Tag(0x0008, 0x0101);
/// CodingSchemeDesignator (0008,0102) SH 1
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodingSchemeVersion (0008,0103) SH 1
#[rustfmt::skip]
pub const CODING_SCHEME_VERSION: Tag = Tag(0x0008, 0x0103);
/// CodeMeaning (0008,0104) LO 1
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// MappingResource (0008,0105) CS 1
#[rustfmt::skip]
pub const MAPPING_RESOURCE: Tag = Tag(0x0008, 0x0105);
/// ContextGroupVersion (0008,0106) DT 1
#[rustfmt::skip]
pub const CONTEXT_GROUP_VERSION: Tag = Tag(0x0008, 0x0106);
/// ContextGroupLocalVersion (0008,0107) DT 1
#[rustfmt::skip]
pub const CONTEXT_GROUP_LOCAL_VERSION: Tag = Tag(0x0008, 0x0107);
/// ExtendedCodeMeaning (0008,0108) LT 1
#[rustfmt::skip]
pub const EXTENDED_CODE_MEANING: Tag = Tag(0x0008, 0x0108);
/// ContextGroupExtensionFlag (0008,010B) CS 1
#[rustfmt::skip]
pub const CONTEXT_GROUP_EXTENSION_FLAG: Tag = Tag(0x0008, 0x010B);
/// CodingSchemeUID (0008,010C) UI 1
#[rustfmt::skip]
pub const CODING_SCHEME_UID: Tag = Tag(0x0008, 0x010C);
/// ContextGroupExtensionCreatorUID (0008,010D) UI 1
#[rustfmt::skip]
pub const CONTEXT_GROUP_EXTENSION_CREATOR_UID: Tag = Tag(0x0008, 0x010D);
/// ContextIdentifier (0008,010F) CS 1
#[rustfmt::skip]
pub const CONTEXT_IDENTIFIER: Tag = Tag(0x0008, 0x010F);
/// CodingSchemeIdentificationSequence (0008,0110) SQ 1
#[rustfmt::skip]
pub const CODING_SCHEME_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0110);
/// CodingSchemeRegistry (0008,0112) LO 1
#[rustfmt::skip]
pub const CODING_SCHEME_REGISTRY: Tag = Tag(0x0008, 0x0112);
/// CodingSchemeExternalID (0008,0114) ST 1
#[rustfmt::skip]
pub const CODING_SCHEME_EXTERNAL_ID: Tag = Tag(0x0008, 0x0114);
/// CodingSchemeName (0008,0115) ST 1
#[rustfmt::skip]
pub const CODING_SCHEME_NAME: Tag = Tag(0x0008, 0x0115);
/// CodingSchemeResponsibleOrganization (0008,0116) ST 1
#[rustfmt::skip]
pub const CODING_SCHEME_RESPONSIBLE_ORGANIZATION: Tag = Tag(0x0008, 0x0116);
/// ContextUID (0008,0117) UI 1
#[rustfmt::skip]
pub const CONTEXT_UID: Tag = Tag(0x0008, 0x0117);
/// MappingResourceUID (0008,0118) UI 1
#[rustfmt::skip]
pub const MAPPING_RESOURCE_UID: Tag = Tag(0x0008, 0x0118);
/// LongCodeValue (0008,0119) UC 1
#[rustfmt::skip]
pub const LONG_CODE_VALUE: Tag = Tag(0x0008, 0x0119);
/// URNCodeValue (0008,0120) UR 1
#[rustfmt::skip]
pub const URN_CODE_VALUE: Tag = Tag(0x0008, 0x0120);
/// EquivalentCodeSequence (0008,0121) SQ 1
#[rustfmt::skip]
pub const EQUIVALENT_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0121);
/// MappingResourceName (0008,0122) LO 1
#[rustfmt::skip]
pub const MAPPING_RESOURCE_NAME: Tag = Tag(0x0008, 0x0122);
/// ContextGroupIdentificationSequence (0008,0123) SQ 1
#[rustfmt::skip]
pub const CONTEXT_GROUP_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0123);
/// MappingResourceIdentificationSequence (0008,0124) SQ 1
#[rustfmt::skip]
pub const MAPPING_RESOURCE_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0124);
/// TimezoneOffsetFromUTC (0008,0201) SH 1
#[rustfmt::skip]
pub const TIMEZONE_OFFSET_FROM_UTC: Tag = Tag(0x0008, 0x0201);
/// ResponsibleGroupCodeSequence (0008,0220) SQ 1
#[rustfmt::skip]
pub const RESPONSIBLE_GROUP_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0220);
/// EquipmentModality (0008,0221) CS 1
#[rustfmt::skip]
pub const EQUIPMENT_MODALITY: Tag = Tag(0x0008, 0x0221);
/// ManufacturerRelatedModelGroup (0008,0222) LO 1
#[rustfmt::skip]
pub const MANUFACTURER_RELATED_MODEL_GROUP: Tag = Tag(0x0008, 0x0222);
/// PrivateDataElementCharacteristicsSequence (0008,0300) SQ 1
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_CHARACTERISTICS_SEQUENCE: Tag = Tag(0x0008, 0x0300);
/// PrivateGroupReference (0008,0301) US 1
#[rustfmt::skip]
pub const PRIVATE_GROUP_REFERENCE: Tag = Tag(0x0008, 0x0301);
/// PrivateCreatorReference (0008,0302) LO 1
#[rustfmt::skip]
pub const PRIVATE_CREATOR_REFERENCE: Tag = Tag(0x0008, 0x0302);
/// BlockIdentifyingInformationStatus (0008,0303) CS 1
#[rustfmt::skip]
pub const BLOCK_IDENTIFYING_INFORMATION_STATUS: Tag = Tag(0x0008, 0x0303);
/// NonidentifyingPrivateElements (0008,0304) US 1-n
#[rustfmt::skip]
pub const NONIDENTIFYING_PRIVATE_ELEMENTS: Tag = Tag(0x0008, 0x0304);
/// DeidentificationActionSequence (0008,0305) SQ 1
#[rustfmt::skip]
pub const DEIDENTIFICATION_ACTION_SEQUENCE: Tag = Tag(0x0008, 0x0305);
/// IdentifyingPrivateElements (0008,0306) US 1-n
#[rustfmt::skip]
pub const IDENTIFYING_PRIVATE_ELEMENTS: Tag = Tag(0x0008, 0x0306);
/// DeidentificationAction (0008,0307) CS 1
#[rustfmt::skip]
pub const DEIDENTIFICATION_ACTION: Tag = Tag(0x0008, 0x0307);
/// PrivateDataElement (0008,0308) US 1
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT: Tag = Tag(0x0008, 0x0308);
/// PrivateDataElementValueMultiplicity (0008,0309) UL 1-3
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_VALUE_MULTIPLICITY: Tag = Tag(0x0008, 0x0309);
/// PrivateDataElementValueRepresentation (0008,030A) CS 1
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_VALUE_REPRESENTATION: Tag = Tag(0x0008, 0x030A);
/// PrivateDataElementNumberOfItems (0008,030B) UL 1-2
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_NUMBER_OF_ITEMS: Tag = Tag(0x0008, 0x030B);
/// PrivateDataElementName (0008,030C) UC 1
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_NAME: Tag = Tag(0x0008, 0x030C);
/// PrivateDataElementKeyword (0008,030D) UC 1
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_KEYWORD: Tag = Tag(0x0008, 0x030D);
/// PrivateDataElementDescription (0008,030E) UT 1
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_DESCRIPTION: Tag = Tag(0x0008, 0x030E);
/// PrivateDataElementEncoding (0008,030F) UT 1
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_ENCODING: Tag = Tag(0x0008, 0x030F);
/// PrivateDataElementDefinitionSequence (0008,0310) SQ 1
#[rustfmt::skip]
pub const PRIVATE_DATA_ELEMENT_DEFINITION_SEQUENCE: Tag = Tag(0x0008, 0x0310);
/// NetworkID (0008,1000) AE 1
#[rustfmt::skip]
pub const NETWORK_ID: Tag = Tag(0x0008, 0x1000);
/// StationName (0008,1010) SH 1
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// StudyDescription (0008,1030) LO 1
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// ProcedureCodeSequence (0008,1032) SQ 1
#[rustfmt::skip]
pub const PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1032);
/// SeriesDescription (0008,103E) LO 1
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// SeriesDescriptionCodeSequence (0008,103F) SQ 1
#[rustfmt::skip]
pub const SERIES_DESCRIPTION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x103F);
/// InstitutionalDepartmentName (0008,1040) LO 1
#[rustfmt::skip]
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// InstitutionalDepartmentTypeCodeSequence (0008,1041) SQ 1
#[rustfmt::skip]
pub const INSTITUTIONAL_DEPARTMENT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1041);
/// PhysiciansOfRecord (0008,1048) PN 1-n
#[rustfmt::skip]
pub const PHYSICIANS_OF_RECORD: Tag = Tag(0x0008, 0x1048);
/// PhysiciansOfRecordIdentificationSequence (0008,1049) SQ 1
#[rustfmt::skip]
pub const PHYSICIANS_OF_RECORD_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1049);
/// PerformingPhysicianName (0008,1050) PN 1-n
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// PerformingPhysicianIdentificationSequence (0008,1052) SQ 1
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1052);
/// NameOfPhysiciansReadingStudy (0008,1060) PN 1-n
#[rustfmt::skip]
pub const NAME_OF_PHYSICIANS_READING_STUDY: Tag = Tag(0x0008, 0x1060);
/// PhysiciansReadingStudyIdentificationSequence (0008,1062) SQ 1
#[rustfmt::skip]
pub const PHYSICIANS_READING_STUDY_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1062);
/// OperatorsName (0008,1070) PN 1-n
#[rustfmt::skip]
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// OperatorIdentificationSequence (0008,1072) SQ 1
#[rustfmt::skip]
pub const OPERATOR_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1072);
/// AdmittingDiagnosesDescription (0008,1080) LO 1-n
#[rustfmt::skip]
pub const ADMITTING_DIAGNOSES_DESCRIPTION: Tag = Tag(0x0008, 0x1080);
/// AdmittingDiagnosesCodeSequence (0008,1084) SQ 1
#[rustfmt::skip]
pub const ADMITTING_DIAGNOSES_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1084);
/// PyramidDescription (0008,1088) LO 1
#[rustfmt::skip]
pub const PYRAMID_DESCRIPTION: Tag = Tag(0x0008, 0x1088);
/// ManufacturerModelName (0008,1090) LO 1
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// ReferencedResultsSequence (0008,1100) SQ 1
#[rustfmt::skip]
pub const REFERENCED_RESULTS_SEQUENCE: Tag = Tag(0x0008, 0x1100);
/// ReferencedStudySequence (0008,1110) SQ 1
#[rustfmt::skip]
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// ReferencedPerformedProcedureStepSequence (0008,1111) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
/// ReferencedSeriesSequence (0008,1115) SQ 1
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// ReferencedPatientSequence (0008,1120) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PATIENT_SEQUENCE: Tag = Tag(0x0008, 0x1120);
/// ReferencedVisitSequence (0008,1125) SQ 1
#[rustfmt::skip]
pub const REFERENCED_VISIT_SEQUENCE: Tag = Tag(0x0008, 0x1125);
/// ReferencedOverlaySequence (0008,1130) SQ 1
#[rustfmt::skip]
pub const REFERENCED_OVERLAY_SEQUENCE: Tag = Tag(0x0008, 0x1130);
/// ReferencedStereometricInstanceSequence (0008,1134) SQ 1
#[rustfmt::skip]
pub const REFERENCED_STEREOMETRIC_INSTANCE_SEQUENCE: Tag = Tag(0x0008, 0x1134);
/// ReferencedWaveformSequence (0008,113A) SQ 1
#[rustfmt::skip]
pub const REFERENCED_WAVEFORM_SEQUENCE: Tag = Tag(0x0008, 0x113A);
/// ReferencedImageSequence (0008,1140) SQ 1
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// ReferencedCurveSequence (0008,1145) SQ 1
#[rustfmt::skip]
pub const REFERENCED_CURVE_SEQUENCE: Tag = Tag(0x0008, 0x1145);
/// ReferencedInstanceSequence (0008,114A) SQ 1
#[rustfmt::skip]
pub const REFERENCED_INSTANCE_SEQUENCE: Tag = Tag(0x0008, 0x114A);
/// ReferencedRealWorldValueMappingInstanceSequence (0008,114B) SQ 1
#[rustfmt::skip]
pub const REFERENCED_REAL_WORLD_VALUE_MAPPING_INSTANCE_SEQUENCE: Tag = Tag(0x0008, 0x114B);
/// ReferencedSOPClassUID (0008,1150) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// DefinitionSourceSequence (0008,1156) SQ 1
#[rustfmt::skip]
pub const DEFINITION_SOURCE_SEQUENCE: Tag = Tag(0x0008, 0x1156);
/// SOPClassesSupported (0008,115A) UI 1-n
#[rustfmt::skip]
pub const SOP_CLASSES_SUPPORTED: Tag = Tag(0x0008, 0x115A);
/// ReferencedFrameNumber (0008,1160) IS 1-n
#[rustfmt::skip]
pub const REFERENCED_FRAME_NUMBER: Tag = Tag(0x0008, 0x1160);
/// SimpleFrameList (0008,1161) UL 1-n
#[rustfmt::skip]
pub const SIMPLE_FRAME_LIST: Tag = Tag(0x0008, 0x1161);
/// CalculatedFrameList (0008,1162) UL 3-3n
#[rustfmt::skip]
pub const CALCULATED_FRAME_LIST: Tag = Tag(0x0008, 0x1162);
/// TimeRange (0008,1163) FD 2
#[rustfmt::skip]
pub const TIME_RANGE: Tag = Tag(0x0008, 0x1163);
/// FrameExtractionSequence (0008,1164) SQ 1
#[rustfmt::skip]
pub const FRAME_EXTRACTION_SEQUENCE: Tag = Tag(0x0008, 0x1164);
/// MultiFrameSourceSOPInstanceUID (0008,1167) UI 1
#[rustfmt::skip]
pub const MULTI_FRAME_SOURCE_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1167);
/// RetrieveURL (0008,1190) UR 1
#[rustfmt::skip]
pub const RETRIEVE_URL: Tag = Tag(0x0008, 0x1190);
/// TransactionUID (0008,1195) UI 1
#[rustfmt::skip]
pub const TRANSACTION_UID: Tag = Tag(0x0008, 0x1195);
/// WarningReason (0008,1196) US 1
#[rustfmt::skip]
pub const WARNING_REASON: Tag = Tag(0x0008, 0x1196);
/// FailureReason (0008,1197) US 1
#[rustfmt::skip]
pub const FAILURE_REASON: Tag = Tag(0x0008, 0x1197);
/// FailedSOPSequence (0008,1198) SQ 1
#[rustfmt::skip]
pub const FAILED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1198);
/// ReferencedSOPSequence (0008,1199) SQ 1
#[rustfmt::skip]
pub const REFERENCED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1199);
/// OtherFailuresSequence (0008,119A) SQ 1
#[rustfmt::skip]
pub const OTHER_FAILURES_SEQUENCE: Tag = Tag(0x0008, 0x119A);
/// StudiesContainingOtherReferencedInstancesSequence (0008,1200) SQ 1
#[rustfmt::skip]
pub const STUDIES_CONTAINING_OTHER_REFERENCED_INSTANCES_SEQUENCE: Tag = Tag(0x0008, 0x1200);
/// RelatedSeriesSequence (0008,1250) SQ 1
#[rustfmt::skip]
pub const RELATED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1250);
/// LossyImageCompressionRetired (0008,2110) CS 1
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_RETIRED: Tag = Tag(0x0008, 0x2110);
/// DerivationDescription (0008,2111) ST 1
#[rustfmt::skip]
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// SourceImageSequence (0008,2112) SQ 1
#[rustfmt::skip]
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// StageName (0008,2120) SH 1
#[rustfmt::skip]
pub const STAGE_NAME: Tag = Tag(0x0008, 0x2120);
/// StageNumber (0008,2122) IS 1
#[rustfmt::skip]
pub const STAGE_NUMBER: Tag = Tag(0x0008, 0x2122);
/// NumberOfStages (0008,2124) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_STAGES: Tag = Tag(0x0008, 0x2124);
/// ViewName (0008,2127) SH 1
#[rustfmt::skip]
pub const VIEW_NAME: Tag = Tag(0x0008, 0x2127);
/// ViewNumber (0008,2128) IS 1
#[rustfmt::skip]
pub const VIEW_NUMBER: Tag = Tag(0x0008, 0x2128);
/// NumberOfEventTimers (0008,2129) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_EVENT_TIMERS: Tag = Tag(0x0008, 0x2129);
/// NumberOfViewsInStage (0008,212A) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_VIEWS_IN_STAGE: Tag = Tag(0x0008, 0x212A);
/// EventElapsedTimes (0008,2130) DS 1-n
#[rustfmt::skip]
pub const EVENT_ELAPSED_TIMES: Tag = Tag(0x0008, 0x2130);
/// EventTimerNames (0008,2132) LO 1-n
#[rustfmt::skip]
pub const EVENT_TIMER_NAMES: Tag = Tag(0x0008, 0x2132);
/// EventTimerSequence (0008,2133) SQ 1
#[rustfmt::skip]
pub const EVENT_TIMER_SEQUENCE: Tag = Tag(0x0008, 0x2133);
/// EventTimeOffset (0008,2134) FD 1
#[rustfmt::skip]
pub const EVENT_TIME_OFFSET: Tag = Tag(0x0008, 0x2134);
/// EventCodeSequence (0008,2135) SQ 1
#[rustfmt::skip]
pub const EVENT_CODE_SEQUENCE: Tag = Tag(0x0008, 0x2135);
/// StartTrim (0008,2142) IS 1
#[rustfmt::skip]
pub const START_TRIM: Tag = Tag(0x0008, 0x2142);
/// StopTrim (0008,2143) IS 1
#[rustfmt::skip]
pub const STOP_TRIM: Tag = Tag(0x0008, 0x2143);
/// RecommendedDisplayFrameRate (0008,2144) IS 1
#[rustfmt::skip]
pub const RECOMMENDED_DISPLAY_FRAME_RATE: Tag = Tag(0x0008, 0x2144);
/// TransducerPosition (0008,2200) CS 1
#[rustfmt::skip]
pub const TRANSDUCER_POSITION: Tag = Tag(0x0008, 0x2200);
/// TransducerOrientation (0008,2204) CS 1
#[rustfmt::skip]
pub const TRANSDUCER_ORIENTATION: Tag = Tag(0x0008, 0x2204);
/// AnatomicStructure (0008,2208) CS 1
#[rustfmt::skip]
pub const ANATOMIC_STRUCTURE: Tag = Tag(0x0008, 0x2208);
/// AnatomicRegionSequence (0008,2218) SQ 1
#[rustfmt::skip]
pub const ANATOMIC_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2218);
/// AnatomicRegionModifierSequence (0008,2220) SQ 1
#[rustfmt::skip]
pub const ANATOMIC_REGION_MODIFIER_SEQUENCE: Tag = Tag(0x0008, 0x2220);
/// PrimaryAnatomicStructureSequence (0008,2228) SQ 1
#[rustfmt::skip]
pub const PRIMARY_ANATOMIC_STRUCTURE_SEQUENCE: Tag = Tag(0x0008, 0x2228);
/// AnatomicStructureSpaceOrRegionSequence (0008,2229) SQ 1
#[rustfmt::skip]
pub const ANATOMIC_STRUCTURE_SPACE_OR_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2229);
/// PrimaryAnatomicStructureModifierSequence (0008,2230) SQ 1
#[rustfmt::skip]
pub const PRIMARY_ANATOMIC_STRUCTURE_MODIFIER_SEQUENCE: Tag = Tag(0x0008, 0x2230);
/// AlternateRepresentationSequence (0008,3001) SQ 1
#[rustfmt::skip]
pub const ALTERNATE_REPRESENTATION_SEQUENCE: Tag = Tag(0x0008, 0x3001);
/// AvailableTransferSyntaxUID (0008,3002) UI 1-n
#[rustfmt::skip]
pub const AVAILABLE_TRANSFER_SYNTAX_UID: Tag = Tag(0x0008, 0x3002);
/// IrradiationEventUID (0008,3010) UI 1-n
#[rustfmt::skip]
pub const IRRADIATION_EVENT_UID: Tag = Tag(0x0008, 0x3010);
/// SourceIrradiationEventSequence (0008,3011) SQ 1
#[rustfmt::skip]
pub const SOURCE_IRRADIATION_EVENT_SEQUENCE: Tag = Tag(0x0008, 0x3011);
/// RadiopharmaceuticalAdministrationEventUID (0008,3012) UI 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_ADMINISTRATION_EVENT_UID: Tag = Tag(0x0008, 0x3012);
/// FrameType (0008,9007) CS 4
#[rustfmt::skip]
pub const FRAME_TYPE: Tag = Tag(0x0008, 0x9007);
/// ReferencedImageEvidenceSequence (0008,9092) SQ 1
#[rustfmt::skip]
pub const REFERENCED_IMAGE_EVIDENCE_SEQUENCE: Tag = Tag(0x0008, 0x9092);
/// ReferencedRawDataSequence (0008,9121) SQ 1
#[rustfmt::skip]
pub const REFERENCED_RAW_DATA_SEQUENCE: Tag = Tag(0x0008, 0x9121);
/// CreatorVersionUID (0008,9123) UI 1
#[rustfmt::skip]
pub const CREATOR_VERSION_UID: Tag = Tag(0x0008, 0x9123);
/// DerivationImageSequence (0008,9124) SQ 1
#[rustfmt::skip]
pub const DERIVATION_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x9124);
/// SourceImageEvidenceSequence (0008,9154) SQ 1
#[rustfmt::skip]
pub const SOURCE_IMAGE_EVIDENCE_SEQUENCE: Tag = Tag(0x0008, 0x9154);
/// PixelPresentation (0008,9205) CS 1
#[rustfmt::skip]
pub const PIXEL_PRESENTATION: Tag = Tag(0x0008, 0x9205);
/// VolumetricProperties (0008,9206) CS 1
#[rustfmt::skip]
pub const VOLUMETRIC_PROPERTIES: Tag = Tag(0x0008, 0x9206);
/// VolumeBasedCalculationTechnique (0008,9207) CS 1
#[rustfmt::skip]
pub const VOLUME_BASED_CALCULATION_TECHNIQUE: Tag = Tag(0x0008, 0x9207);
/// ComplexImageComponent (0008,9208) CS 1
#[rustfmt::skip]
pub const COMPLEX_IMAGE_COMPONENT: Tag = Tag(0x0008, 0x9208);
/// AcquisitionContrast (0008,9209) CS 1
#[rustfmt::skip]
pub const ACQUISITION_CONTRAST: Tag = Tag(0x0008, 0x9209);
/// DerivationCodeSequence (0008,9215) SQ 1
#[rustfmt::skip]
pub const DERIVATION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x9215);
/// ReferencedPresentationStateSequence (0008,9237) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PRESENTATION_STATE_SEQUENCE: Tag = Tag(0x0008, 0x9237);
/// ReferencedOtherPlaneSequence (0008,9410) SQ 1
#[rustfmt::skip]
pub const REFERENCED_OTHER_PLANE_SEQUENCE: Tag = Tag(0x0008, 0x9410);
/// FrameDisplaySequence (0008,9458) SQ 1
#[rustfmt::skip]
pub const FRAME_DISPLAY_SEQUENCE: Tag = Tag(0x0008, 0x9458);
/// RecommendedDisplayFrameRateInFloat (0008,9459) FL 1
#[rustfmt::skip]
pub const RECOMMENDED_DISPLAY_FRAME_RATE_IN_FLOAT: Tag = Tag(0x0008, 0x9459);
/// SkipFrameRangeFlag (0008,9460) CS 1
#[rustfmt::skip]
pub const SKIP_FRAME_RANGE_FLAG: Tag = Tag(0x0008, 0x9460);
/// PatientName (0010,0010) PN 1
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO 1
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// IssuerOfPatientID (0010,0021) LO 1
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// TypeOfPatientID (0010,0022) CS 1
#[rustfmt::skip]
pub const TYPE_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0022);
/// IssuerOfPatientIDQualifiersSequence (0010,0024) SQ 1
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID_QUALIFIERS_SEQUENCE: Tag = Tag(0x0010, 0x0024);
/// SourcePatientGroupIdentificationSequence (0010,0026) SQ 1
#[rustfmt::skip]
pub const SOURCE_PATIENT_GROUP_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0010, 0x0026);
/// GroupOfPatientsIdentificationSequence (0010,0027) SQ 1
#[rustfmt::skip]
pub const GROUP_OF_PATIENTS_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0010, 0x0027);
/// SubjectRelativePositionInImage (0010,0028) US 3
#[rustfmt::skip]
pub const SUBJECT_RELATIVE_POSITION_IN_IMAGE: Tag = Tag(0x0010, 0x0028);
/// PatientBirthDate (0010,0030) DA 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientBirthTime (0010,0032) TM 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// PatientBirthDateInAlternativeCalendar (0010,0033) LO 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE_IN_ALTERNATIVE_CALENDAR: Tag = Tag(0x0010, 0x0033);
/// PatientDeathDateInAlternativeCalendar (0010,0034) LO 1
#[rustfmt::skip]
pub const PATIENT_DEATH_DATE_IN_ALTERNATIVE_CALENDAR: Tag = Tag(0x0010, 0x0034);
/// PatientAlternativeCalendar (0010,0035) CS 1
#[rustfmt::skip]
pub const PATIENT_ALTERNATIVE_CALENDAR: Tag = Tag(0x0010, 0x0035);
/// PatientSex (0010,0040) CS 1
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// PatientInsurancePlanCodeSequence (0010,0050) SQ 1
#[rustfmt::skip]
pub const PATIENT_INSURANCE_PLAN_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0050);
/// PatientPrimaryLanguageCodeSequence (0010,0101) SQ 1
#[rustfmt::skip]
pub const PATIENT_PRIMARY_LANGUAGE_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0101);
/// PatientPrimaryLanguageModifierCodeSequence (0010,0102) SQ 1
#[rustfmt::skip]
pub const PATIENT_PRIMARY_LANGUAGE_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0102);
/// QualityControlSubject (0010,0200) CS 1
#[rustfmt::skip]
pub const QUALITY_CONTROL_SUBJECT: Tag = Tag(0x0010, 0x0200);
/// QualityControlSubjectTypeCodeSequence (0010,0201) SQ 1
#[rustfmt::skip]
pub const QUALITY_CONTROL_SUBJECT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0201);
/// StrainDescription (0010,0212) UC 1
#[rustfmt::skip]
pub const STRAIN_DESCRIPTION: Tag = Tag(0x0010, 0x0212);
/// StrainNomenclature (0010,0213) LO 1
#[rustfmt::skip]
pub const STRAIN_NOMENCLATURE: Tag = Tag(0x0010, 0x0213);
/// StrainStockNumber (0010,0214) LO 1
#[rustfmt::skip]
pub const STRAIN_STOCK_NUMBER: Tag = Tag(0x0010, 0x0214);
/// StrainSourceRegistryCodeSequence (0010,0215) SQ 1
#[rustfmt::skip]
pub const STRAIN_SOURCE_REGISTRY_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0215);
/// StrainStockSequence (0010,0216) SQ 1
#[rustfmt::skip]
pub const STRAIN_STOCK_SEQUENCE: Tag = Tag(0x0010, 0x0216);
/// StrainSource (0010,0217) LO 1
#[rustfmt::skip]
pub const STRAIN_SOURCE: Tag = Tag(0x0010, 0x0217);
/// StrainAdditionalInformation (0010,0218) UT 1
#[rustfmt::skip]
pub const STRAIN_ADDITIONAL_INFORMATION: Tag = Tag(0x0010, 0x0218);
/// StrainCodeSequence (0010,0219) SQ 1
#[rustfmt::skip]
pub const STRAIN_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0219);
/// GeneticModificationsSequence (0010,0221) SQ 1
#[rustfmt::skip]
pub const GENETIC_MODIFICATIONS_SEQUENCE: Tag = Tag(0x0010, 0x0221);
/// GeneticModificationsDescription (0010,0222) UC 1
#[rustfmt::skip]
pub const GENETIC_MODIFICATIONS_DESCRIPTION: Tag = Tag(0x0010, 0x0222);
/// GeneticModificationsNomenclature (0010,0223) LO 1
#[rustfmt::skip]
pub const GENETIC_MODIFICATIONS_NOMENCLATURE: Tag = Tag(0x0010, 0x0223);
/// GeneticModificationsCodeSequence (0010,0229) SQ 1
#[rustfmt::skip]
pub const GENETIC_MODIFICATIONS_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0229);
/// OtherPatientIDs (0010,1000) LO 1-n
#[rustfmt::skip]
pub const OTHER_PATIENT_IDS: Tag = Tag(0x0010, 0x1000);
/// OtherPatientNames (0010,1001) PN 1-n
#[rustfmt::skip]
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
/// OtherPatientIDsSequence (0010,1002) SQ 1
#[rustfmt::skip]
pub const OTHER_PATIENT_IDS_SEQUENCE: Tag = Tag(0x0010, 0x1002);
/// PatientBirthName (0010,1005) PN 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_NAME: Tag = Tag(0x0010, 0x1005);
/// PatientAge (0010,1010) AS 1
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize (0010,1020) DS 1
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientSizeCodeSequence (0010,1021) SQ 1
#[rustfmt::skip]
pub const PATIENT_SIZE_CODE_SEQUENCE: Tag = Tag(0x0010, 0x1021);
/// PatientBodyMassIndex (0010,1022) DS 1
#[rustfmt::skip]
pub const PATIENT_BODY_MASS_INDEX: Tag = Tag(0x0010, 0x1022);
/// MeasuredAPDimension (0010,1023) DS 1
#[rustfmt::skip]
pub const MEASURED_AP_DIMENSION: Tag = Tag(0x0010, 0x1023);
/// MeasuredLateralDimension (0010,1024) DS 1
#[rustfmt::skip]
pub const MEASURED_LATERAL_DIMENSION: Tag = Tag(0x0010, 0x1024);
/// PatientWeight (0010,1030) DS 1
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// PatientAddress (0010,1040) LO 1
#[rustfmt::skip]
pub const PATIENT_ADDRESS: Tag = Tag(0x0010, 0x1040);
/// InsurancePlanIdentification (0010,1050) LO 1-n
#[rustfmt::skip]
pub const INSURANCE_PLAN_IDENTIFICATION: Tag = Tag(0x0010, 0x1050);
/// PatientMotherBirthName (0010,1060) PN 1
#[rustfmt::skip]
pub const PATIENT_MOTHER_BIRTH_NAME: Tag = Tag(0x0010, 0x1060);
/// MilitaryRank (0010,1080) LO 1
#[rustfmt::skip]
pub const MILITARY_RANK: Tag = Tag(0x0010, 0x1080);
/// BranchOfService (0010,1081) LO 1
#[rustfmt::skip]
pub const BRANCH_OF_SERVICE: Tag = Tag(0x0010, 0x1081);
/// MedicalRecordLocator (0010,1090) LO 1
#[rustfmt::skip]
pub const MEDICAL_RECORD_LOCATOR: Tag = Tag(0x0010, 0x1090);
/// ReferencedPatientPhotoSequence (0010,1100) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PATIENT_PHOTO_SEQUENCE: Tag = Tag(0x0010, 0x1100);
/// MedicalAlerts (0010,2000) LO 1-n
#[rustfmt::skip]
pub const MEDICAL_ALERTS: Tag = Tag(0x0010, 0x2000);
/// Allergies (0010,2110) LO 1-n
#[rustfmt::skip]
pub const ALLERGIES: Tag = Tag(0x0010, 0x2110);
/// CountryOfResidence (0010,2150) LO 1
#[rustfmt::skip]
pub const COUNTRY_OF_RESIDENCE: Tag = Tag(0x0010, 0x2150);
/// RegionOfResidence (0010,2152) LO 1
#[rustfmt::skip]
pub const REGION_OF_RESIDENCE: Tag = Tag(0x0010, 0x2152);
/// PatientTelephoneNumbers (0010,2154) SH 1-n
#[rustfmt::skip]
pub const PATIENT_TELEPHONE_NUMBERS: Tag = Tag(0x0010, 0x2154);
/// PatientTelecomInformation (0010,2155) LT 1
#[rustfmt::skip]
pub const PATIENT_TELECOM_INFORMATION: Tag = Tag(0x0010, 0x2155);
/// EthnicGroup (0010,2160) SH 1
#[rustfmt::skip]
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// Occupation (0010,2180) SH 1
#[rustfmt::skip]
pub const OCCUPATION: Tag = Tag(0x0010, 0x2180);
/// SmokingStatus (0010,21A0) CS 1
#[rustfmt::skip]
pub const SMOKING_STATUS: Tag = Tag(0x0010, 0x21A0);
/// AdditionalPatientHistory (0010,21B0) LT 1
#[rustfmt::skip]
pub const ADDITIONAL_PATIENT_HISTORY: Tag = Tag(0x0010, 0x21B0);
/// PregnancyStatus (0010,21C0) US 1
#[rustfmt::skip]
pub const PREGNANCY_STATUS: Tag = Tag(0x0010, 0x21C0);
/// LastMenstrualDate (0010,21D0) DA 1
#[rustfmt::skip]
pub const LAST_MENSTRUAL_DATE: Tag = Tag(0x0010, 0x21D0);
/// PatientReligiousPreference (0010,21F0) LO 1
#[rustfmt::skip]
pub const PATIENT_RELIGIOUS_PREFERENCE: Tag = Tag(0x0010, 0x21F0);
/// PatientSpeciesDescription (0010,2201) LO 1
#[rustfmt::skip]
pub const PATIENT_SPECIES_DESCRIPTION: Tag = Tag(0x0010, 0x2201);
/// PatientSpeciesCodeSequence (0010,2202) SQ 1
#[rustfmt::skip]
pub const PATIENT_SPECIES_CODE_SEQUENCE: Tag = Tag(0x0010, 0x2202);
/// PatientSexNeutered (0010,2203) CS 1
#[rustfmt::skip]
pub const PATIENT_SEX_NEUTERED: Tag = Tag(0x0010, 0x2203);
/// AnatomicalOrientationType (0010,2210) CS 1
#[rustfmt::skip]
pub const ANATOMICAL_ORIENTATION_TYPE: Tag = Tag(0x0010, 0x2210);
/// PatientBreedDescription (0010,2292) LO 1
#[rustfmt::skip]
pub const PATIENT_BREED_DESCRIPTION: Tag = Tag(0x0010, 0x2292);
/// PatientBreedCodeSequence (0010,2293) SQ 1
#[rustfmt::skip]
pub const PATIENT_BREED_CODE_SEQUENCE: Tag = Tag(0x0010, 0x2293);
/// BreedRegistrationSequence (0010,2294) SQ 1
#[rustfmt::skip]
pub const BREED_REGISTRATION_SEQUENCE: Tag = Tag(0x0010, 0x2294);
/// BreedRegistrationNumber (0010,2295) LO 1
#[rustfmt::skip]
pub const BREED_REGISTRATION_NUMBER: Tag = Tag(0x0010, 0x2295);
/// BreedRegistryCodeSequence (0010,2296) SQ 1
#[rustfmt::skip]
pub const BREED_REGISTRY_CODE_SEQUENCE: Tag = Tag(0x0010, 0x2296);
/// ResponsiblePerson (0010,2297) PN 1
#[rustfmt::skip]
pub const RESPONSIBLE_PERSON: Tag = Tag(0x0010, 0x2297);
/// ResponsiblePersonRole (0010,2298) CS 1
#[rustfmt::skip]
pub const RESPONSIBLE_PERSON_ROLE: Tag = Tag(0x0010, 0x2298);
/// ResponsibleOrganization (0010,2299) LO 1
#[rustfmt::skip]
pub const RESPONSIBLE_ORGANIZATION: Tag = Tag(0x0010, 0x2299);
/// PatientComments (0010,4000) LT 1
#[rustfmt::skip]
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// ExaminedBodyThickness (0010,9431) FL 1
#[rustfmt::skip]
pub const EXAMINED_BODY_THICKNESS: Tag = Tag(0x0010, 0x9431);
/// ClinicalTrialSponsorName (0012,0010) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SPONSOR_NAME: Tag = Tag(0x0012, 0x0010);
/// ClinicalTrialProtocolID (0012,0020) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_PROTOCOL_ID: Tag = Tag(0x0012, 0x0020);
/// ClinicalTrialProtocolName (0012,0021) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_PROTOCOL_NAME: Tag = Tag(0x0012, 0x0021);
/// ClinicalTrialSiteID (0012,0030) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SITE_ID: Tag = Tag(0x0012, 0x0030);
/// ClinicalTrialSiteName (0012,0031) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SITE_NAME: Tag = Tag(0x0012, 0x0031);
/// ClinicalTrialSubjectID (0012,0040) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SUBJECT_ID: Tag = Tag(0x0012, 0x0040);
/// ClinicalTrialSubjectReadingID (0012,0042) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SUBJECT_READING_ID: Tag = Tag(0x0012, 0x0042);
/// ClinicalTrialTimePointID (0012,0050) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_TIME_POINT_ID: Tag = Tag(0x0012, 0x0050);
/// ClinicalTrialTimePointDescription (0012,0051) ST 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_TIME_POINT_DESCRIPTION: Tag = Tag(0x0012, 0x0051);
/// ClinicalTrialCoordinatingCenterName (0012,0060) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_COORDINATING_CENTER_NAME: Tag = Tag(0x0012, 0x0060);
/// PatientIdentityRemoved (0012,0062) CS 1
#[rustfmt::skip]
pub const PATIENT_IDENTITY_REMOVED: Tag = Tag(0x0012, 0x0062);
/// DeidentificationMethod (0012,0063) LO 1-n
#[rustfmt::skip]
pub const DEIDENTIFICATION_METHOD: Tag = Tag(0x0012, 0x0063);
/// DeidentificationMethodCodeSequence (0012,0064) SQ 1
#[rustfmt::skip]
pub const DEIDENTIFICATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0012, 0x0064);
/// ClinicalTrialSeriesID (0012,0071) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SERIES_ID: Tag = Tag(0x0012, 0x0071);
/// ClinicalTrialSeriesDescription (0012,0072) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SERIES_DESCRIPTION: Tag = Tag(0x0012, 0x0072);
/// ClinicalTrialProtocolEthicsCommitteeName (0012,0081) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_PROTOCOL_ETHICS_COMMITTEE_NAME: Tag = Tag(0x0012, 0x0081);
/// ClinicalTrialProtocolEthicsCommitteeApprovalNumber (0012,0082) LO 1
#[rustfmt::skip]
pub const CLINICAL_TRIAL_PROTOCOL_ETHICS_COMMITTEE_APPROVAL_NUMBER: Tag = Tag(0x0012, 0x0082);
/// ConsentForClinicalTrialUseSequence (0012,0083) SQ 1
#[rustfmt::skip]
pub const CONSENT_FOR_CLINICAL_TRIAL_USE_SEQUENCE: Tag = Tag(0x0012, 0x0083);
/// DistributionType (0012,0084) CS 1
#[rustfmt::skip]
pub const DISTRIBUTION_TYPE: Tag = Tag(0x0012, 0x0084);
/// ConsentForDistributionFlag (0012,0085) CS 1
#[rustfmt::skip]
pub const CONSENT_FOR_DISTRIBUTION_FLAG: Tag = Tag(0x0012, 0x0085);
/// ContrastBolusAgent (0018,0010) LO 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT: Tag = Tag(0x0018, 0x0010);
/// ContrastBolusAgentSequence (0018,0012) SQ 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT_SEQUENCE: Tag = Tag(0x0018, 0x0012);
/// ContrastBolusT1Relaxivity (0018,0013) FL 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_T1_RELAXIVITY: Tag = Tag(0x0018, 0x0013);
/// ContrastBolusAdministrationRouteSequence (0018,0014) SQ 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_ADMINISTRATION_ROUTE_SEQUENCE: Tag = Tag(0x0018, 0x0014);
/// BodyPartExamined (0018,0015) CS 1
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// ScanningSequence (0018,0020) CS 1-n
#[rustfmt::skip]
pub const SCANNING_SEQUENCE: Tag = Tag(0x0018, 0x0020);
/// SequenceVariant (0018,0021) CS 1-n
#[rustfmt::skip]
pub const SEQUENCE_VARIANT: Tag = Tag(0x0018, 0x0021);
/// ScanOptions (0018,0022) CS 1-n
#[rustfmt::skip]
pub const SCAN_OPTIONS: Tag = Tag(0x0018, 0x0022);
/// MRAcquisitionType (0018,0023) CS 1
#[rustfmt::skip]
pub const MR_ACQUISITION_TYPE: Tag = Tag(0x0018, 0x0023);
/// SequenceName (0018,0024) SH 1
#[rustfmt::skip]
pub const SEQUENCE_NAME: Tag = Tag(0x0018, 0x0024);
/// AngioFlag (0018,0025) CS 1
#[rustfmt::skip]
pub const ANGIO_FLAG: Tag = Tag(0x0018, 0x0025);
/// InterventionDrugInformationSequence (0018,0026) SQ 1
#[rustfmt::skip]
pub const INTERVENTION_DRUG_INFORMATION_SEQUENCE: Tag = Tag(0x0018, 0x0026);
/// InterventionDrugStopTime (0018,0027) TM 1
#[rustfmt::skip]
pub const INTERVENTION_DRUG_STOP_TIME: Tag = Tag(0x0018, 0x0027);
/// InterventionDrugDose (0018,0028) DS 1
#[rustfmt::skip]
pub const INTERVENTION_DRUG_DOSE: Tag = Tag(0x0018, 0x0028);
/// InterventionDrugCodeSequence (0018,0029) SQ 1
#[rustfmt::skip]
pub const INTERVENTION_DRUG_CODE_SEQUENCE: Tag = Tag(0x0018, 0x0029);
/// AdditionalDrugSequence (0018,002A) SQ 1
#[rustfmt::skip]
pub const ADDITIONAL_DRUG_SEQUENCE: Tag = Tag(0x0018, 0x002A);
/// Radionuclide (0018,0030) LO 1-n
#[rustfmt::skip]
pub const RADIONUCLIDE: Tag = Tag(0x0018, 0x0030);
/// Radiopharmaceutical (0018,0031) LO 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL: Tag = Tag(0x0018, 0x0031);
/// EnergyWindowCenterline (0018,0032) DS 1
#[rustfmt::skip]
pub const ENERGY_WINDOW_CENTERLINE: Tag = Tag(0x0018, 0x0032);
/// EnergyWindowTotalWidth (0018,0033) DS 1-n
#[rustfmt::skip]
pub const ENERGY_WINDOW_TOTAL_WIDTH: Tag = Tag(0x0018, 0x0033);
/// InterventionDrugName (0018,0034) LO 1
#[rustfmt::skip]
pub const INTERVENTION_DRUG_NAME: Tag = Tag(0x0018, 0x0034);
/// InterventionDrugStartTime (0018,0035) TM 1
#[rustfmt::skip]
pub const INTERVENTION_DRUG_START_TIME: Tag = Tag(0x0018, 0x0035);
/// InterventionSequence (0018,0036) SQ 1
#[rustfmt::skip]
pub const INTERVENTION_SEQUENCE: Tag = Tag(0x0018, 0x0036);
/// InterventionStatus (0018,0038) CS 1
#[rustfmt::skip]
pub const INTERVENTION_STATUS: Tag = Tag(0x0018, 0x0038);
/// InterventionDescription (0018,003A) ST 1
#[rustfmt::skip]
pub const INTERVENTION_DESCRIPTION: Tag = Tag(0x0018, 0x003A);
/// CineRate (0018,0040) IS 1
#[rustfmt::skip]
pub const CINE_RATE: Tag = Tag(0x0018, 0x0040);
/// InitialCineRunState (0018,0042) CS 1
#[rustfmt::skip]
pub const INITIAL_CINE_RUN_STATE: Tag = Tag(0x0018, 0x0042);
/// SliceThickness (0018,0050) DS 1
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060) DS 1
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// CountsAccumulated (0018,0070) IS 1
#[rustfmt::skip]
pub const COUNTS_ACCUMULATED: Tag = Tag(0x0018, 0x0070);
/// AcquisitionTerminationCondition (0018,0071) CS 1
#[rustfmt::skip]
pub const ACQUISITION_TERMINATION_CONDITION: Tag = Tag(0x0018, 0x0071);
/// EffectiveDuration (0018,0072) DS 1
#[rustfmt::skip]
pub const EFFECTIVE_DURATION: Tag = Tag(0x0018, 0x0072);
/// AcquisitionStartCondition (0018,0073) CS 1
#[rustfmt::skip]
pub const ACQUISITION_START_CONDITION: Tag = Tag(0x0018, 0x0073);
/// AcquisitionStartConditionData (0018,0074) IS 1
#[rustfmt::skip]
pub const ACQUISITION_START_CONDITION_DATA: Tag = Tag(0x0018, 0x0074);
/// AcquisitionTerminationConditionData (0018,0075) IS 1
#[rustfmt::skip]
pub const ACQUISITION_TERMINATION_CONDITION_DATA: Tag = Tag(0x0018, 0x0075);
/// RepetitionTime (0018,0080) DS 1
#[rustfmt::skip]
pub const REPETITION_TIME: Tag = Tag(0x0018, 0x0080);
/// EchoTime (0018,0081) DS 1
#[rustfmt::skip]
pub const ECHO_TIME: Tag = Tag(0x0018, 0x0081);
/// InversionTime (0018,0082) DS 1
#[rustfmt::skip]
pub const INVERSION_TIME: Tag = Tag(0x0018, 0x0082);
/// NumberOfAverages (0018,0083) DS 1
#[rustfmt::skip]
pub const NUMBER_OF_AVERAGES: Tag = Tag(0x0018, 0x0083);
/// ImagingFrequency (0018,0084) DS 1
#[rustfmt::skip]
pub const IMAGING_FREQUENCY: Tag = Tag(0x0018, 0x0084);
/// ImagedNucleus (0018,0085) SH 1
#[rustfmt::skip]
pub const IMAGED_NUCLEUS: Tag = Tag(0x0018, 0x0085);
/// EchoNumbers (0018,0086) IS 1-n
#[rustfmt::skip]
pub const ECHO_NUMBERS: Tag = Tag(0x0018, 0x0086);
/// MagneticFieldStrength (0018,0087) DS 1
#[rustfmt::skip]
pub const MAGNETIC_FIELD_STRENGTH: Tag = Tag(0x0018, 0x0087);
/// SpacingBetweenSlices (0018,0088) DS 1
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// NumberOfPhaseEncodingSteps (0018,0089) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_PHASE_ENCODING_STEPS: Tag = Tag(0x0018, 0x0089);
/// DataCollectionDiameter (0018,0090) DS 1
#[rustfmt::skip]
pub const DATA_COLLECTION_DIAMETER: Tag = Tag(0x0018, 0x0090);
/// EchoTrainLength (0018,0091) IS 1
#[rustfmt::skip]
pub const ECHO_TRAIN_LENGTH: Tag = Tag(0x0018, 0x0091);
/// PercentSampling (0018,0093) DS 1
#[rustfmt::skip]
pub const PERCENT_SAMPLING: Tag = Tag(0x0018, 0x0093);
/// PercentPhaseFieldOfView (0018,0094) DS 1
#[rustfmt::skip]
pub const PERCENT_PHASE_FIELD_OF_VIEW: Tag = Tag(0x0018, 0x0094);
/// PixelBandwidth (0018,0095) DS 1
#[rustfmt::skip]
pub const PIXEL_BANDWIDTH: Tag = Tag(0x0018, 0x0095);
/// DeviceSerialNumber (0018,1000) LO 1
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// DeviceUID (0018,1002) UI 1
#[rustfmt::skip]
pub const DEVICE_UID: Tag = Tag(0x0018, 0x1002);
/// DeviceID (0018,1003) LO 1
#[rustfmt::skip]
pub const DEVICE_ID: Tag = Tag(0x0018, 0x1003);
/// PlateID (0018,1004) LO 1
#[rustfmt::skip]
pub const PLATE_ID: Tag = Tag(0x0018, 0x1004);
/// GeneratorID (0018,1005) LO 1
#[rustfmt::skip]
pub const GENERATOR_ID: Tag = Tag(0x0018, 0x1005);
/// GridID (0018,1006) LO 1
#[rustfmt::skip]
pub const GRID_ID: Tag = Tag(0x0018, 0x1006);
/// CassetteID (0018,1007) LO 1
#[rustfmt::skip]
pub const CASSETTE_ID: Tag = Tag(0x0018, 0x1007);
/// GantryID (0018,1008) LO 1
#[rustfmt::skip]
pub const GANTRY_ID: Tag = Tag(0x0018, 0x1008);
/// UniqueDeviceIdentifier (0018,1009) UT 1
#[rustfmt::skip]
pub const UNIQUE_DEVICE_IDENTIFIER: Tag = Tag(0x0018, 0x1009);
/// UDISequence (0018,100A) SQ 1
#[rustfmt::skip]
pub const UDI_SEQUENCE: Tag = Tag(0x0018, 0x100A);
/// ManufacturerDeviceClassUID (0018,100B) UI 1-n
#[rustfmt::skip]
pub const MANUFACTURER_DEVICE_CLASS_UID: Tag = Tag(0x0018, 0x100B);
/// SecondaryCaptureDeviceID (0018,1010) LO 1
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_DEVICE_ID: Tag = Tag(0x0018, 0x1010);
/// HardcopyCreationDeviceID (0018,1011) LO 1
#[rustfmt::skip]
pub const HARDCOPY_CREATION_DEVICE_ID: Tag = Tag(0x0018, 0x1011);
/// DateOfSecondaryCapture (0018,1012) DA 1
#[rustfmt::skip]
pub const DATE_OF_SECONDARY_CAPTURE: Tag = Tag(0x0018, 0x1012);
/// TimeOfSecondaryCapture (0018,1014) TM 1
#[rustfmt::skip]
pub const TIME_OF_SECONDARY_CAPTURE: Tag = Tag(0x0018, 0x1014);
/// SecondaryCaptureDeviceManufacturer (0018,1016) LO 1
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_DEVICE_MANUFACTURER: Tag = Tag(0x0018, 0x1016);
/// HardcopyDeviceManufacturer (0018,1017) LO 1
#[rustfmt::skip]
pub const HARDCOPY_DEVICE_MANUFACTURER: Tag = Tag(0x0018, 0x1017);
/// SecondaryCaptureDeviceManufacturerModelName (0018,1018) LO 1
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_DEVICE_MANUFACTURER_MODEL_NAME: Tag = Tag(0x0018, 0x1018);
/// SecondaryCaptureDeviceSoftwareVersions (0018,1019) LO 1-n
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_DEVICE_SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1019);
/// SoftwareVersions (0018,1020) LO 1-n
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// VideoImageFormatAcquired (0018,1022) SH 1
#[rustfmt::skip]
pub const VIDEO_IMAGE_FORMAT_ACQUIRED: Tag = Tag(0x0018, 0x1022);
/// DigitalImageFormatAcquired (0018,1023) LO 1
#[rustfmt::skip]
pub const DIGITAL_IMAGE_FORMAT_ACQUIRED: Tag = Tag(0x0018, 0x1023);
/// ProtocolName (0018,1030) LO 1
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// ContrastBolusRoute (0018,1040) LO 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_ROUTE: Tag = Tag(0x0018, 0x1040);
/// ContrastBolusVolume (0018,1041) DS 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_VOLUME: Tag = Tag(0x0018, 0x1041);
/// ContrastBolusStartTime (0018,1042) TM 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_START_TIME: Tag = Tag(0x0018, 0x1042);
/// ContrastBolusStopTime (0018,1043) TM 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_STOP_TIME: Tag = Tag(0x0018, 0x1043);
/// ContrastBolusTotalDose (0018,1044) DS 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_TOTAL_DOSE: Tag = Tag(0x0018, 0x1044);
/// SyringeCounts (0018,1045) IS 1
#[rustfmt::skip]
pub const SYRINGE_COUNTS: Tag = Tag(0x0018, 0x1045);
/// ContrastFlowRate (0018,1046) DS 1-n
#[rustfmt::skip]
pub const CONTRAST_FLOW_RATE: Tag = Tag(0x0018, 0x1046);
/// ContrastFlowDuration (0018,1047) DS 1-n
#[rustfmt::skip]
pub const CONTRAST_FLOW_DURATION: Tag = Tag(0x0018, 0x1047);
/// ContrastBolusIngredient (0018,1048) CS 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_INGREDIENT: Tag = Tag(0x0018, 0x1048);
/// ContrastBolusIngredientConcentration (0018,1049) DS 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_INGREDIENT_CONCENTRATION: Tag = Tag(0x0018, 0x1049);
/// SpatialResolution (0018,1050) DS 1
#[rustfmt::skip]
pub const SPATIAL_RESOLUTION: Tag = Tag(0x0018, 0x1050);
/// TriggerTime (0018,1060) DS 1
#[rustfmt::skip]
pub const TRIGGER_TIME: Tag = Tag(0x0018, 0x1060);
/// TriggerSourceOrType (0018,1061) LO 1
#[rustfmt::skip]
pub const TRIGGER_SOURCE_OR_TYPE: Tag = Tag(0x0018, 0x1061);
/// NominalInterval (0018,1062) IS 1
#[rustfmt::skip]
pub const NOMINAL_INTERVAL: Tag = Tag(0x0018, 0x1062);
/// FrameTime (0018,1063) DS 1
#[rustfmt::skip]
pub const FRAME_TIME: Tag = Tag(0x0018, 0x1063);
/// CardiacFramingType (0018,1064) LO 1
#[rustfmt::skip]
pub const CARDIAC_FRAMING_TYPE: Tag = Tag(0x0018, 0x1064);
/// FrameTimeVector (0018,1065) DS 1-n
#[rustfmt::skip]
pub const FRAME_TIME_VECTOR: Tag = Tag(0x0018, 0x1065);
/// FrameDelay (0018,1066) DS 1
#[rustfmt::skip]
pub const FRAME_DELAY: Tag = Tag(0x0018, 0x1066);
/// ImageTriggerDelay (0018,1067) DS 1
#[rustfmt::skip]
pub const IMAGE_TRIGGER_DELAY: Tag = Tag(0x0018, 0x1067);
/// MultiplexGroupTimeOffset (0018,1068) DS 1
#[rustfmt::skip]
pub const MULTIPLEX_GROUP_TIME_OFFSET: Tag = Tag(0x0018, 0x1068);
/// TriggerTimeOffset (0018,1069) DS 1
#[rustfmt::skip]
pub const TRIGGER_TIME_OFFSET: Tag = Tag(0x0018, 0x1069);
/// SynchronizationTrigger (0018,106A) CS 1
#[rustfmt::skip]
pub const SYNCHRONIZATION_TRIGGER: Tag = Tag(0x0018, 0x106A);
/// SynchronizationChannel (0018,106C) US 2
#[rustfmt::skip]
pub const SYNCHRONIZATION_CHANNEL: Tag = Tag(0x0018, 0x106C);
/// TriggerSamplePosition (0018,106E) UL 1
#[rustfmt::skip]
pub const TRIGGER_SAMPLE_POSITION: Tag = Tag(0x0018, 0x106E);
/// RadiopharmaceuticalRoute (0018,1070) LO 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_ROUTE: Tag = Tag(0x0018, 0x1070);
/// RadiopharmaceuticalVolume (0018,1071) DS 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_VOLUME: Tag = Tag(0x0018, 0x1071);
/// RadiopharmaceuticalStartTime (0018,1072) TM 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_START_TIME: Tag = Tag(0x0018, 0x1072);
/// RadiopharmaceuticalStopTime (0018,1073) TM 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_STOP_TIME: Tag = Tag(0x0018, 0x1073);
/// RadionuclideTotalDose (0018,1074) DS 1
#[rustfmt::skip]
pub const RADIONUCLIDE_TOTAL_DOSE: Tag = Tag(0x0018, 0x1074);
/// RadionuclideHalfLife (0018,1075) DS 1
#[rustfmt::skip]
pub const RADIONUCLIDE_HALF_LIFE: Tag = Tag(0x0018, 0x1075);
/// RadionuclidePositronFraction (0018,1076) DS 1
#[rustfmt::skip]
pub const RADIONUCLIDE_POSITRON_FRACTION: Tag = Tag(0x0018, 0x1076);
/// RadiopharmaceuticalSpecificActivity (0018,1077) DS 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_SPECIFIC_ACTIVITY: Tag = Tag(0x0018, 0x1077);
/// RadiopharmaceuticalStartDateTime (0018,1078) DT 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_START_DATE_TIME: Tag = Tag(0x0018, 0x1078);
/// RadiopharmaceuticalStopDateTime (0018,1079) DT 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_STOP_DATE_TIME: Tag = Tag(0x0018, 0x1079);
/// BeatRejectionFlag (0018,1080) CS 1
#[rustfmt::skip]
pub const BEAT_REJECTION_FLAG: Tag = Tag(0x0018, 0x1080);
/// LowRRValue (0018,1081) IS 1
#[rustfmt::skip]
pub const LOW_RR_VALUE: Tag = Tag(0x0018, 0x1081);
/// HighRRValue (0018,1082) IS 1
#[rustfmt::skip]
pub const HIGH_RR_VALUE: Tag = Tag(0x0018, 0x1082);
/// IntervalsAcquired (0018,1083) IS 1
#[rustfmt::skip]
pub const INTERVALS_ACQUIRED: Tag = Tag(0x0018, 0x1083);
/// IntervalsRejected (0018,1084) IS 1
#[rustfmt::skip]
pub const INTERVALS_REJECTED: Tag = Tag(0x0018, 0x1084);
/// PVCRejection (0018,1085) LO 1
#[rustfmt::skip]
pub const PVC_REJECTION: Tag = Tag(0x0018, 0x1085);
/// SkipBeats (0018,1086) IS 1
#[rustfmt::skip]
pub const SKIP_BEATS: Tag = Tag(0x0018, 0x1086);
/// HeartRate (0018,1088) IS 1
#[rustfmt::skip]
pub const HEART_RATE: Tag = Tag(0x0018, 0x1088);
/// CardiacNumberOfImages (0018,1090) IS 1
#[rustfmt::skip]
pub const CARDIAC_NUMBER_OF_IMAGES: Tag = Tag(0x0018, 0x1090);
/// TriggerWindow (0018,1094) IS 1
#[rustfmt::skip]
pub const TRIGGER_WINDOW: Tag = Tag(0x0018, 0x1094);
/// ReconstructionDiameter (0018,1100) DS 1
#[rustfmt::skip]
pub const RECONSTRUCTION_DIAMETER: Tag = Tag(0x0018, 0x1100);
/// DistanceSourceToDetector (0018,1110) DS 1
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_DETECTOR: Tag = Tag(0x0018, 0x1110);
/// DistanceSourceToPatient (0018,1111) DS 1
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_PATIENT: Tag = Tag(0x0018, 0x1111);
/// EstimatedRadiographicMagnificationFactor (0018,1114) DS 1
#[rustfmt::skip]
pub const ESTIMATED_RADIOGRAPHIC_MAGNIFICATION_FACTOR: Tag = Tag(0x0018, 0x1114);
/// GantryDetectorTilt (0018,1120) DS 1
#[rustfmt::skip]
pub const GANTRY_DETECTOR_TILT: Tag = Tag(0x0018, 0x1120);
/// GantryDetectorSlew (0018,1121) DS 1
#[rustfmt::skip]
pub const GANTRY_DETECTOR_SLEW: Tag = Tag(0x0018, 0x1121);
/// TableHeight (0018,1130) DS 1
#[rustfmt::skip]
pub const TABLE_HEIGHT: Tag = Tag(0x0018, 0x1130);
/// TableTraverse (0018,1131) DS 1
#[rustfmt::skip]
pub const TABLE_TRAVERSE: Tag = Tag(0x0018, 0x1131);
/// TableMotion (0018,1134) CS 1
#[rustfmt::skip]
pub const TABLE_MOTION: Tag = Tag(0x0018, 0x1134);
/// TableVerticalIncrement (0018,1135) DS 1-n
#[rustfmt::skip]
pub const TABLE_VERTICAL_INCREMENT: Tag = Tag(0x0018, 0x1135);
/// TableLateralIncrement (0018,1136) DS 1-n
#[rustfmt::skip]
pub const TABLE_LATERAL_INCREMENT: Tag = Tag(0x0018, 0x1136);
/// TableLongitudinalIncrement (0018,1137) DS 1-n
#[rustfmt::skip]
pub const TABLE_LONGITUDINAL_INCREMENT: Tag = Tag(0x0018, 0x1137);
/// TableAngle (0018,1138) DS 1
#[rustfmt::skip]
pub const TABLE_ANGLE: Tag = Tag(0x0018, 0x1138);
/// TableType (0018,113A) CS 1
#[rustfmt::skip]
pub const TABLE_TYPE: Tag = Tag(0x0018, 0x113A);
/// RotationDirection (0018,1140) CS 1
#[rustfmt::skip]
pub const ROTATION_DIRECTION: Tag = Tag(0x0018, 0x1140);
/// AngularPosition (0018,1141) DS 1
#[rustfmt::skip]
pub const ANGULAR_POSITION: Tag = Tag(0x0018, 0x1141);
/// RadialPosition (0018,1142) DS 1-n
#[rustfmt::skip]
pub const RADIAL_POSITION: Tag = Tag(0x0018, 0x1142);
/// ScanArc (0018,1143) DS 1
#[rustfmt::skip]
pub const SCAN_ARC: Tag = Tag(0x0018, 0x1143);
/// AngularStep (0018,1144) DS 1
#[rustfmt::skip]
pub const ANGULAR_STEP: Tag = Tag(0x0018, 0x1144);
/// CenterOfRotationOffset (0018,1145) DS 1
#[rustfmt::skip]
pub const CENTER_OF_ROTATION_OFFSET: Tag = Tag(0x0018, 0x1145);
/// RotationOffset (0018,1146) DS 1-n
#[rustfmt::skip]
pub const ROTATION_OFFSET: Tag = Tag(0x0018, 0x1146);
/// FieldOfViewShape (0018,1147) CS 1
#[rustfmt::skip]
pub const FIELD_OF_VIEW_SHAPE: Tag = Tag(0x0018, 0x1147);
/// FieldOfViewDimensions (0018,1149) IS 1-2
#[rustfmt::skip]
pub const FIELD_OF_VIEW_DIMENSIONS: Tag = Tag(0x0018, 0x1149);
/// ExposureTime (0018,1150) IS 1
#[rustfmt::skip]
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
/// XRayTubeCurrent (0018,1151) IS 1
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Exposure (0018,1152) IS 1
#[rustfmt::skip]
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// ExposureInuAs (0018,1153) IS 1
#[rustfmt::skip]
pub const EXPOSURE_INU_AS: Tag = Tag(0x0018, 0x1153);
/// AveragePulseWidth (0018,1154) DS 1
#[rustfmt::skip]
pub const AVERAGE_PULSE_WIDTH: Tag = Tag(0x0018, 0x1154);
/// RadiationSetting (0018,1155) CS 1
#[rustfmt::skip]
pub const RADIATION_SETTING: Tag = Tag(0x0018, 0x1155);
/// RectificationType (0018,1156) CS 1
#[rustfmt::skip]
pub const RECTIFICATION_TYPE: Tag = Tag(0x0018, 0x1156);
/// RadiationMode (0018,115A) CS 1
#[rustfmt::skip]
pub const RADIATION_MODE: Tag = Tag(0x0018, 0x115A);
/// ImageAndFluoroscopyAreaDoseProduct (0018,115E) DS 1
#[rustfmt::skip]
pub const IMAGE_AND_FLUOROSCOPY_AREA_DOSE_PRODUCT: Tag = Tag(0x0018, 0x115E);
/// FilterType (0018,1160) SH 1
#[rustfmt::skip]
pub const FILTER_TYPE: Tag = Tag(0x0018, 0x1160);
/// TypeOfFilters (0018,1161) LO 1-n
#[rustfmt::skip]
pub const TYPE_OF_FILTERS: Tag = Tag(0x0018, 0x1161);
/// IntensifierSize (0018,1162) DS 1
#[rustfmt::skip]
pub const INTENSIFIER_SIZE: Tag = Tag(0x0018, 0x1162);
/// ImagerPixelSpacing (0018,1164) DS 2
#[rustfmt::skip]
pub const IMAGER_PIXEL_SPACING: Tag = Tag(0x0018, 0x1164);
/// Grid (0018,1166) CS 1-n
#[rustfmt::skip]
pub const GRID: Tag = Tag(0x0018, 0x1166);
/// GeneratorPower (0018,1170) IS 1
#[rustfmt::skip]
pub const GENERATOR_POWER: Tag = Tag(0x0018, 0x1170);
/// CollimatorGridName (0018,1180) SH 1
#[rustfmt::skip]
pub const COLLIMATOR_GRID_NAME: Tag = Tag(0x0018, 0x1180);
/// CollimatorType (0018,1181) CS 1
#[rustfmt::skip]
pub const COLLIMATOR_TYPE: Tag = Tag(0x0018, 0x1181);
/// FocalDistance (0018,1182) IS 1-2
#[rustfmt::skip]
pub const FOCAL_DISTANCE: Tag = Tag(0x0018, 0x1182);
/// XFocusCenter (0018,1183) DS 1-2
#[rustfmt::skip]
pub const X_FOCUS_CENTER: Tag = Tag(0x0018, 0x1183);
/// YFocusCenter (0018,1184) DS 1-2
#[rustfmt::skip]
pub const Y_FOCUS_CENTER: Tag = Tag(0x0018, 0x1184);
/// FocalSpots (0018,1190) DS 1-n
#[rustfmt::skip]
pub const FOCAL_SPOTS: Tag = Tag(0x0018, 0x1190);
/// AnodeTargetMaterial (0018,1191) CS 1
#[rustfmt::skip]
pub const ANODE_TARGET_MATERIAL: Tag = Tag(0x0018, 0x1191);
/// BodyPartThickness (0018,11A0) DS 1
#[rustfmt::skip]
pub const BODY_PART_THICKNESS: Tag = Tag(0x0018, 0x11A0);
/// CompressionForce (0018,11A2) DS 1
#[rustfmt::skip]
pub const COMPRESSION_FORCE: Tag = Tag(0x0018, 0x11A2);
/// CompressionPressure (0018,11A3) DS 1
#[rustfmt::skip]
pub const COMPRESSION_PRESSURE: Tag = Tag(0x0018, 0x11A3);
/// PaddleDescription (0018,11A4) LO 1
#[rustfmt::skip]
pub const PADDLE_DESCRIPTION: Tag = Tag(0x0018, 0x11A4);
/// CompressionContactArea (0018,11A5) DS 1
#[rustfmt::skip]
pub const COMPRESSION_CONTACT_AREA: Tag = Tag(0x0018, 0x11A5);
/// DateOfLastCalibration (0018,1200) DA 1-n
#[rustfmt::skip]
pub const DATE_OF_LAST_CALIBRATION: Tag = Tag(0x0018, 0x1200);
/// TimeOfLastCalibration (0018,1201) TM 1-n
#[rustfmt::skip]
pub const TIME_OF_LAST_CALIBRATION: Tag = Tag(0x0018, 0x1201);
/// DateTimeOfLastCalibration (0018,1202) DT 1
#[rustfmt::skip]
pub const DATE_TIME_OF_LAST_CALIBRATION: Tag = Tag(0x0018, 0x1202);
/// ConvolutionKernel (0018,1210) SH 1-n
#[rustfmt::skip]
pub const CONVOLUTION_KERNEL: Tag = Tag(0x0018, 0x1210);
/// UpperLowerPixelValues (0018,1240) IS 1-n
#[rustfmt::skip]
pub const UPPER_LOWER_PIXEL_VALUES: Tag = Tag(0x0018, 0x1240);
/// ActualFrameDuration (0018,1242) IS 1
#[rustfmt::skip]
pub const ACTUAL_FRAME_DURATION: Tag = Tag(0x0018, 0x1242);
/// CountRate (0018,1243) IS 1
#[rustfmt::skip]
pub const COUNT_RATE: Tag = Tag(0x0018, 0x1243);
/// PreferredPlaybackSequencing (0018,1244) US 1
#[rustfmt::skip]
pub const PREFERRED_PLAYBACK_SEQUENCING: Tag = Tag(0x0018, 0x1244);
/// ReceiveCoilName (0018,1250) SH 1
#[rustfmt::skip]
pub const RECEIVE_COIL_NAME: Tag = Tag(0x0018, 0x1250);
/// TransmitCoilName (0018,1251) SH 1
#[rustfmt::skip]
pub const TRANSMIT_COIL_NAME: Tag = Tag(0x0018, 0x1251);
/// PlateType (0018,1260) SH 1
#[rustfmt::skip]
pub const PLATE_TYPE: Tag = Tag(0x0018, 0x1260);
/// PhosphorType (0018,1261) LO 1
#[rustfmt::skip]
pub const PHOSPHOR_TYPE: Tag = Tag(0x0018, 0x1261);
/// WaterEquivalentDiameter (0018,1271) FD 1
#[rustfmt::skip]
pub const WATER_EQUIVALENT_DIAMETER: Tag = Tag(0x0018, 0x1271);
/// WaterEquivalentDiameterCalculationMethodCodeSequence (0018,1272) SQ 1
#[rustfmt::skip]
pub const WATER_EQUIVALENT_DIAMETER_CALCULATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0018, 0x1272);
/// ScanVelocity (0018,1300) DS 1
#[rustfmt::skip]
pub const SCAN_VELOCITY: Tag = Tag(0x0018, 0x1300);
/// WholeBodyTechnique (0018,1301) CS 1-n
#[rustfmt::skip]
pub const WHOLE_BODY_TECHNIQUE: Tag = Tag(0x0018, 0x1301);
/// ScanLength (0018,1302) IS 1
#[rustfmt::skip]
pub const SCAN_LENGTH: Tag = Tag(0x0018, 0x1302);
/// AcquisitionMatrix (0018,1310) US 4
#[rustfmt::skip]
pub const ACQUISITION_MATRIX: Tag = Tag(0x0018, 0x1310);
/// InPlanePhaseEncodingDirection (0018,1312) CS 1
#[rustfmt::skip]
pub const IN_PLANE_PHASE_ENCODING_DIRECTION: Tag = Tag(0x0018, 0x1312);
/// FlipAngle (0018,1314) DS 1
#[rustfmt::skip]
pub const FLIP_ANGLE: Tag = Tag(0x0018, 0x1314);
/// VariableFlipAngleFlag (0018,1315) CS 1
#[rustfmt::skip]
pub const VARIABLE_FLIP_ANGLE_FLAG: Tag = Tag(0x0018, 0x1315);
/// SAR (0018,1316) DS 1
#[rustfmt::skip]
pub const SAR: Tag = Tag(0x0018, 0x1316);
/// dBdt (0018,1318) DS 1
#[rustfmt::skip]
pub const D_BDT: Tag = Tag(0x0018, 0x1318);
/// B1rms (0018,1320) FL 1
#[rustfmt::skip]
pub const B1RMS: Tag = Tag(0x0018, 0x1320);
/// AcquisitionDeviceProcessingDescription (0018,1400) LO 1
#[rustfmt::skip]
pub const ACQUISITION_DEVICE_PROCESSING_DESCRIPTION: Tag = Tag(0x0018, 0x1400);
/// AcquisitionDeviceProcessingCode (0018,1401) LO 1
#[rustfmt::skip]
pub const ACQUISITION_DEVICE_PROCESSING_CODE: Tag = Tag(0x0018, 0x1401);
/// CassetteOrientation (0018,1402) CS 1
#[rustfmt::skip]
pub const CASSETTE_ORIENTATION: Tag = Tag(0x0018, 0x1402);
/// CassetteSize (0018,1403) CS 1
#[rustfmt::skip]
pub const CASSETTE_SIZE: Tag = Tag(0x0018, 0x1403);
/// ExposuresOnPlate (0018,1404) US 1
#[rustfmt::skip]
pub const EXPOSURES_ON_PLATE: Tag = Tag(0x0018, 0x1404);
/// RelativeXRayExposure (0018,1405) IS 1
#[rustfmt::skip]
pub const RELATIVE_X_RAY_EXPOSURE: Tag = Tag(0x0018, 0x1405);
/// ExposureIndex (0018,1411) DS 1
#[rustfmt::skip]
pub const EXPOSURE_INDEX: Tag = Tag(0x0018, 0x1411);
/// TargetExposureIndex (0018,1412) DS 1
#[rustfmt::skip]
pub const TARGET_EXPOSURE_INDEX: Tag = Tag(0x0018, 0x1412);
/// DeviationIndex (0018,1413) DS 1
#[rustfmt::skip]
pub const DEVIATION_INDEX: Tag = Tag(0x0018, 0x1413);
/// ColumnAngulation (0018,1450) DS 1
#[rustfmt::skip]
pub const COLUMN_ANGULATION: Tag = Tag(0x0018, 0x1450);
/// TomoLayerHeight (0018,1460) DS 1
#[rustfmt::skip]
pub const TOMO_LAYER_HEIGHT: Tag = Tag(0x0018, 0x1460);
/// TomoAngle (0018,1470) DS 1
#[rustfmt::skip]
pub const TOMO_ANGLE: Tag = Tag(0x0018, 0x1470);
/// TomoTime (0018,1480) DS 1
#[rustfmt::skip]
pub const TOMO_TIME: Tag = Tag(0x0018, 0x1480);
/// TomoType (0018,1490) CS 1
#[rustfmt::skip]
pub const TOMO_TYPE: Tag = Tag(0x0018, 0x1490);
/// TomoClass (0018,1491) CS 1
#[rustfmt::skip]
pub const TOMO_CLASS: Tag = Tag(0x0018, 0x1491);
/// NumberOfTomosynthesisSourceImages (0018,1495) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_TOMOSYNTHESIS_SOURCE_IMAGES: Tag = Tag(0x0018, 0x1495);
/// PositionerMotion (0018,1500) CS 1
#[rustfmt::skip]
pub const POSITIONER_MOTION: Tag = Tag(0x0018, 0x1500);
/// PositionerType (0018,1508) CS 1
#[rustfmt::skip]
pub const POSITIONER_TYPE: Tag = Tag(0x0018, 0x1508);
/// PositionerPrimaryAngle (0018,1510) DS 1
#[rustfmt::skip]
pub const POSITIONER_PRIMARY_ANGLE: Tag = Tag(0x0018, 0x1510);
/// PositionerSecondaryAngle (0018,1511) DS 1
#[rustfmt::skip]
pub const POSITIONER_SECONDARY_ANGLE: Tag = Tag(0x0018, 0x1511);
/// PositionerPrimaryAngleIncrement (0018,1520) DS 1-n
#[rustfmt::skip]
pub const POSITIONER_PRIMARY_ANGLE_INCREMENT: Tag = Tag(0x0018, 0x1520);
/// PositionerSecondaryAngleIncrement (0018,1521) DS 1-n
#[rustfmt::skip]
pub const POSITIONER_SECONDARY_ANGLE_INCREMENT: Tag = Tag(0x0018, 0x1521);
/// DetectorPrimaryAngle (0018,1530) DS 1
#[rustfmt::skip]
pub const DETECTOR_PRIMARY_ANGLE: Tag = Tag(0x0018, 0x1530);
/// DetectorSecondaryAngle (0018,1531) DS 1
#[rustfmt::skip]
pub const DETECTOR_SECONDARY_ANGLE: Tag = Tag(0x0018, 0x1531);
/// ShutterShape (0018,1600) CS 1-3
#[rustfmt::skip]
pub const SHUTTER_SHAPE: Tag = Tag(0x0018, 0x1600);
/// ShutterLeftVerticalEdge (0018,1602) IS 1
#[rustfmt::skip]
pub const SHUTTER_LEFT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x1602);
/// ShutterRightVerticalEdge (0018,1604) IS 1
#[rustfmt::skip]
pub const SHUTTER_RIGHT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x1604);
/// ShutterUpperHorizontalEdge (0018,1606) IS 1
#[rustfmt::skip]
pub const SHUTTER_UPPER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x1606);
/// ShutterLowerHorizontalEdge (0018,1608) IS 1
#[rustfmt::skip]
pub const SHUTTER_LOWER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x1608);
/// CenterOfCircularShutter (0018,1610) IS 2
#[rustfmt::skip]
pub const CENTER_OF_CIRCULAR_SHUTTER: Tag = Tag(0x0018, 0x1610);
/// RadiusOfCircularShutter (0018,1612) IS 1
#[rustfmt::skip]
pub const RADIUS_OF_CIRCULAR_SHUTTER: Tag = Tag(0x0018, 0x1612);
/// VerticesOfThePolygonalShutter (0018,1620) IS 2-2n
#[rustfmt::skip]
pub const VERTICES_OF_THE_POLYGONAL_SHUTTER: Tag = Tag(0x0018, 0x1620);
/// ShutterPresentationValue (0018,1622) US 1
#[rustfmt::skip]
pub const SHUTTER_PRESENTATION_VALUE: Tag = Tag(0x0018, 0x1622);
/// ShutterOverlayGroup (0018,1623) US 1
#[rustfmt::skip]
pub const SHUTTER_OVERLAY_GROUP: Tag = Tag(0x0018, 0x1623);
/// ShutterPresentationColorCIELabValue (0018,1624) US 3
#[rustfmt::skip]
pub const SHUTTER_PRESENTATION_COLOR_CIE_LAB_VALUE: Tag = Tag(0x0018, 0x1624);
/// CollimatorShape (0018,1700) CS 1-3
#[rustfmt::skip]
pub const COLLIMATOR_SHAPE: Tag = Tag(0x0018, 0x1700);
/// CollimatorLeftVerticalEdge (0018,1702) IS 1
#[rustfmt::skip]
pub const COLLIMATOR_LEFT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x1702);
/// CollimatorRightVerticalEdge (0018,1704) IS 1
#[rustfmt::skip]
pub const COLLIMATOR_RIGHT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x1704);
/// CollimatorUpperHorizontalEdge (0018,1706) IS 1
#[rustfmt::skip]
pub const COLLIMATOR_UPPER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x1706);
/// CollimatorLowerHorizontalEdge (0018,1708) IS 1
#[rustfmt::skip]
pub const COLLIMATOR_LOWER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x1708);
/// CenterOfCircularCollimator (0018,1710) IS 2
#[rustfmt::skip]
pub const CENTER_OF_CIRCULAR_COLLIMATOR: Tag = Tag(0x0018, 0x1710);
/// RadiusOfCircularCollimator (0018,1712) IS 1
#[rustfmt::skip]
pub const RADIUS_OF_CIRCULAR_COLLIMATOR: Tag = Tag(0x0018, 0x1712);
/// VerticesOfThePolygonalCollimator (0018,1720) IS 2-2n
#[rustfmt::skip]
pub const VERTICES_OF_THE_POLYGONAL_COLLIMATOR: Tag = Tag(0x0018, 0x1720);
/// AcquisitionTimeSynchronized (0018,1800) CS 1
#[rustfmt::skip]
pub const ACQUISITION_TIME_SYNCHRONIZED: Tag = Tag(0x0018, 0x1800);
/// TimeSource (0018,1801) SH 1
#[rustfmt::skip]
pub const TIME_SOURCE: Tag = Tag(0x0018, 0x1801);
/// TimeDistributionProtocol (0018,1802) CS 1
#[rustfmt::skip]
pub const TIME_DISTRIBUTION_PROTOCOL: Tag = Tag(0x0018, 0x1802);
/// NTPSourceAddress (0018,1803) LO 1
#[rustfmt::skip]
pub const NTP_SOURCE_ADDRESS: Tag = Tag(0x0018, 0x1803);
/// PageNumberVector (0018,2001) IS 1-n
#[rustfmt::skip]
pub const PAGE_NUMBER_VECTOR: Tag = Tag(0x0018, 0x2001);
/// FrameLabelVector (0018,2002) SH 1-n
#[rustfmt::skip]
pub const FRAME_LABEL_VECTOR: Tag = Tag(0x0018, 0x2002);
/// FramePrimaryAngleVector (0018,2003) DS 1-n
#[rustfmt::skip]
pub const FRAME_PRIMARY_ANGLE_VECTOR: Tag = Tag(0x0018, 0x2003);
/// FrameSecondaryAngleVector (0018,2004) DS 1-n
#[rustfmt::skip]
pub const FRAME_SECONDARY_ANGLE_VECTOR: Tag = Tag(0x0018, 0x2004);
/// SliceLocationVector (0018,2005) DS 1-n
#[rustfmt::skip]
pub const SLICE_LOCATION_VECTOR: Tag = Tag(0x0018, 0x2005);
/// DisplayWindowLabelVector (0018,2006) SH 1-n
#[rustfmt::skip]
pub const DISPLAY_WINDOW_LABEL_VECTOR: Tag = Tag(0x0018, 0x2006);
/// NominalScannedPixelSpacing (0018,2010) DS 2
#[rustfmt::skip]
pub const NOMINAL_SCANNED_PIXEL_SPACING: Tag = Tag(0x0018, 0x2010);
/// DigitizingDeviceTransportDirection (0018,2020) CS 1
#[rustfmt::skip]
pub const DIGITIZING_DEVICE_TRANSPORT_DIRECTION: Tag = Tag(0x0018, 0x2020);
/// RotationOfScannedFilm (0018,2030) DS 1
#[rustfmt::skip]
pub const ROTATION_OF_SCANNED_FILM: Tag = Tag(0x0018, 0x2030);
/// IVUSAcquisition (0018,3100) CS 1
#[rustfmt::skip]
pub const IVUS_ACQUISITION: Tag = Tag(0x0018, 0x3100);
/// IVUSPullbackRate (0018,3101) DS 1
#[rustfmt::skip]
pub const IVUS_PULLBACK_RATE: Tag = Tag(0x0018, 0x3101);
/// IVUSGatedRate (0018,3102) DS 1
#[rustfmt::skip]
pub const IVUS_GATED_RATE: Tag = Tag(0x0018, 0x3102);
/// IVUSPullbackStartFrameNumber (0018,3103) IS 1
#[rustfmt::skip]
pub const IVUS_PULLBACK_START_FRAME_NUMBER: Tag = Tag(0x0018, 0x3103);
/// IVUSPullbackStopFrameNumber (0018,3104) IS 1
#[rustfmt::skip]
pub const IVUS_PULLBACK_STOP_FRAME_NUMBER: Tag = Tag(0x0018, 0x3104);
/// LesionNumber (0018,3105) IS 1-n
#[rustfmt::skip]
pub const LESION_NUMBER: Tag = Tag(0x0018, 0x3105);
/// OutputPower (0018,5000) SH 1-n
#[rustfmt::skip]
pub const OUTPUT_POWER: Tag = Tag(0x0018, 0x5000);
/// TransducerData (0018,5010) LO 1-n
#[rustfmt::skip]
pub const TRANSDUCER_DATA: Tag = Tag(0x0018, 0x5010);
/// FocusDepth (0018,5012) DS 1
#[rustfmt::skip]
pub const FOCUS_DEPTH: Tag = Tag(0x0018, 0x5012);
/// ProcessingFunction (0018,5020) LO 1
#[rustfmt::skip]
pub const PROCESSING_FUNCTION: Tag = Tag(0x0018, 0x5020);
/// MechanicalIndex (0018,5022) DS 1
#[rustfmt::skip]
pub const MECHANICAL_INDEX: Tag = Tag(0x0018, 0x5022);
/// BoneThermalIndex (0018,5024) DS 1
#[rustfmt::skip]
pub const BONE_THERMAL_INDEX: Tag = Tag(0x0018, 0x5024);
/// CranialThermalIndex (0018,5026) DS 1
#[rustfmt::skip]
pub const CRANIAL_THERMAL_INDEX: Tag = Tag(0x0018, 0x5026);
/// SoftTissueThermalIndex (0018,5027) DS 1
#[rustfmt::skip]
pub const SOFT_TISSUE_THERMAL_INDEX: Tag = Tag(0x0018, 0x5027);
/// SoftTissueFocusThermalIndex (0018,5028) DS 1
#[rustfmt::skip]
pub const SOFT_TISSUE_FOCUS_THERMAL_INDEX: Tag = Tag(0x0018, 0x5028);
/// SoftTissueSurfaceThermalIndex (0018,5029) DS 1
#[rustfmt::skip]
pub const SOFT_TISSUE_SURFACE_THERMAL_INDEX: Tag = Tag(0x0018, 0x5029);
/// DepthOfScanField (0018,5050) IS 1
#[rustfmt::skip]
pub const DEPTH_OF_SCAN_FIELD: Tag = Tag(0x0018, 0x5050);
/// PatientPosition (0018,5100) CS 1
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// ViewPosition (0018,5101) CS 1
#[rustfmt::skip]
pub const VIEW_POSITION: Tag = Tag(0x0018, 0x5101);
/// ProjectionEponymousNameCodeSequence (0018,5104) SQ 1
#[rustfmt::skip]
pub const PROJECTION_EPONYMOUS_NAME_CODE_SEQUENCE: Tag = Tag(0x0018, 0x5104);
/// Sensitivity (0018,6000) DS 1
#[rustfmt::skip]
pub const SENSITIVITY: Tag = Tag(0x0018, 0x6000);
/// SequenceOfUltrasoundRegions (0018,6011) SQ 1
#[rustfmt::skip]
pub const SEQUENCE_OF_ULTRASOUND_REGIONS: Tag = Tag(0x0018, 0x6011);
/// RegionSpatialFormat (0018,6012) US 1
#[rustfmt::skip]
pub const REGION_SPATIAL_FORMAT: Tag = Tag(0x0018, 0x6012);
/// RegionDataType (0018,6014) US 1
#[rustfmt::skip]
pub const REGION_DATA_TYPE: Tag = Tag(0x0018, 0x6014);
/// RegionFlags (0018,6016) UL 1
#[rustfmt::skip]
pub const REGION_FLAGS: Tag = Tag(0x0018, 0x6016);
/// RegionLocationMinX0 (0018,6018) UL 1
#[rustfmt::skip]
pub const REGION_LOCATION_MIN_X0: Tag = Tag(0x0018, 0x6018);
/// RegionLocationMinY0 (0018,601A) UL 1
#[rustfmt::skip]
pub const REGION_LOCATION_MIN_Y0: Tag = Tag(0x0018, 0x601A);
/// RegionLocationMaxX1 (0018,601C) UL 1
#[rustfmt::skip]
pub const REGION_LOCATION_MAX_X1: Tag = Tag(0x0018, 0x601C);
/// RegionLocationMaxY1 (0018,601E) UL 1
#[rustfmt::skip]
pub const REGION_LOCATION_MAX_Y1: Tag = Tag(0x0018, 0x601E);
/// ReferencePixelX0 (0018,6020) SL 1
#[rustfmt::skip]
pub const REFERENCE_PIXEL_X0: Tag = Tag(0x0018, 0x6020);
/// ReferencePixelY0 (0018,6022) SL 1
#[rustfmt::skip]
pub const REFERENCE_PIXEL_Y0: Tag = Tag(0x0018, 0x6022);
/// PhysicalUnitsXDirection (0018,6024) US 1
#[rustfmt::skip]
pub const PHYSICAL_UNITS_X_DIRECTION: Tag = Tag(0x0018, 0x6024);
/// PhysicalUnitsYDirection (0018,6026) US 1
#[rustfmt::skip]
pub const PHYSICAL_UNITS_Y_DIRECTION: Tag = Tag(0x0018, 0x6026);
/// ReferencePixelPhysicalValueX (0018,6028) FD 1
#[rustfmt::skip]
pub const REFERENCE_PIXEL_PHYSICAL_VALUE_X: Tag = Tag(0x0018, 0x6028);
/// ReferencePixelPhysicalValueY (0018,602A) FD 1
#[rustfmt::skip]
pub const REFERENCE_PIXEL_PHYSICAL_VALUE_Y: Tag = Tag(0x0018, 0x602A);
/// PhysicalDeltaX (0018,602C) FD 1
#[rustfmt::skip]
pub const PHYSICAL_DELTA_X: Tag = Tag(0x0018, 0x602C);
/// PhysicalDeltaY (0018,602E) FD 1
#[rustfmt::skip]
pub const PHYSICAL_DELTA_Y: Tag = Tag(0x0018, 0x602E);
/// TransducerFrequency (0018,6030) UL 1
#[rustfmt::skip]
pub const TRANSDUCER_FREQUENCY: Tag = Tag(0x0018, 0x6030);
/// TransducerType (0018,6031) CS 1
#[rustfmt::skip]
pub const TRANSDUCER_TYPE: Tag = Tag(0x0018, 0x6031);
/// PulseRepetitionFrequency (0018,6032) UL 1
#[rustfmt::skip]
pub const PULSE_REPETITION_FREQUENCY: Tag = Tag(0x0018, 0x6032);
/// DopplerCorrectionAngle (0018,6034) FD 1
#[rustfmt::skip]
pub const DOPPLER_CORRECTION_ANGLE: Tag = Tag(0x0018, 0x6034);
/// SteeringAngle (0018,6036) FD 1
#[rustfmt::skip]
pub const STEERING_ANGLE: Tag = Tag(0x0018, 0x6036);
/// DopplerSampleVolumeXPosition (0018,6039) SL 1
#[rustfmt::skip]
pub const DOPPLER_SAMPLE_VOLUME_X_POSITION: Tag = Tag(0x0018, 0x6039);
/// DopplerSampleVolumeYPosition (0018,603B) SL 1
#[rustfmt::skip]
pub const DOPPLER_SAMPLE_VOLUME_Y_POSITION: Tag = Tag(0x0018, 0x603B);
/// TMLinePositionX0 (0018,603D) SL 1
#[rustfmt::skip]
pub const TM_LINE_POSITION_X0: Tag = Tag(0x0018, 0x603D);
/// TMLinePositionY0 (0018,603F) SL 1
#[rustfmt::skip]
pub const TM_LINE_POSITION_Y0: Tag = Tag(0x0018, 0x603F);
/// TMLinePositionX1 (0018,6041) SL 1
#[rustfmt::skip]
pub const TM_LINE_POSITION_X1: Tag = Tag(0x0018, 0x6041);
/// TMLinePositionY1 (0018,6043) SL 1
#[rustfmt::skip]
pub const TM_LINE_POSITION_Y1: Tag = Tag(0x0018, 0x6043);
/// PixelComponentOrganization (0018,6044) US 1
#[rustfmt::skip]
pub const PIXEL_COMPONENT_ORGANIZATION: Tag = Tag(0x0018, 0x6044);
/// PixelComponentMask (0018,6046) UL 1
#[rustfmt::skip]
pub const PIXEL_COMPONENT_MASK: Tag = Tag(0x0018, 0x6046);
/// PixelComponentRangeStart (0018,6048) UL 1
#[rustfmt::skip]
pub const PIXEL_COMPONENT_RANGE_START: Tag = Tag(0x0018, 0x6048);
/// PixelComponentRangeStop (0018,604A) UL 1
#[rustfmt::skip]
pub const PIXEL_COMPONENT_RANGE_STOP: Tag = Tag(0x0018, 0x604A);
/// PixelComponentPhysicalUnits (0018,604C) US 1
#[rustfmt::skip]
pub const PIXEL_COMPONENT_PHYSICAL_UNITS: Tag = Tag(0x0018, 0x604C);
/// PixelComponentDataType (0018,604E) US 1
#[rustfmt::skip]
pub const PIXEL_COMPONENT_DATA_TYPE: Tag = Tag(0x0018, 0x604E);
/// NumberOfTableBreakPoints (0018,6050) UL 1
#[rustfmt::skip]
pub const NUMBER_OF_TABLE_BREAK_POINTS: Tag = Tag(0x0018, 0x6050);
/// TableOfXBreakPoints (0018,6052) UL 1-n
#[rustfmt::skip]
pub const TABLE_OF_X_BREAK_POINTS: Tag = Tag(0x0018, 0x6052);
/// TableOfYBreakPoints (0018,6054) FD 1-n
#[rustfmt::skip]
pub const TABLE_OF_Y_BREAK_POINTS: Tag = Tag(0x0018, 0x6054);
/// NumberOfTableEntries (0018,6056) UL 1
#[rustfmt::skip]
pub const NUMBER_OF_TABLE_ENTRIES: Tag = Tag(0x0018, 0x6056);
/// TableOfPixelValues (0018,6058) UL 1-n
#[rustfmt::skip]
pub const TABLE_OF_PIXEL_VALUES: Tag = Tag(0x0018, 0x6058);
/// TableOfParameterValues (0018,605A) FL 1-n
#[rustfmt::skip]
pub const TABLE_OF_PARAMETER_VALUES: Tag = Tag(0x0018, 0x605A);
/// RWaveTimeVector (0018,6060) FL 1-n
#[rustfmt::skip]
pub const R_WAVE_TIME_VECTOR: Tag = Tag(0x0018, 0x6060);
/// DetectorConditionsNominalFlag (0018,7000) CS 1
#[rustfmt::skip]
pub const DETECTOR_CONDITIONS_NOMINAL_FLAG: Tag = Tag(0x0018, 0x7000);
/// DetectorTemperature (0018,7001) DS 1
#[rustfmt::skip]
pub const DETECTOR_TEMPERATURE: Tag = Tag(0x0018, 0x7001);
/// DetectorType (0018,7004) CS 1
#[rustfmt::skip]
pub const DETECTOR_TYPE: Tag = Tag(0x0018, 0x7004);
/// DetectorConfiguration (0018,7005) CS 1
#[rustfmt::skip]
pub const DETECTOR_CONFIGURATION: Tag = Tag(0x0018, 0x7005);
/// DetectorDescription (0018,7006) LT 1
#[rustfmt::skip]
pub const DETECTOR_DESCRIPTION: Tag = Tag(0x0018, 0x7006);
/// DetectorMode (0018,7008) LT 1
#[rustfmt::skip]
pub const DETECTOR_MODE: Tag = Tag(0x0018, 0x7008);
/// DetectorID (0018,700A) SH 1
#[rustfmt::skip]
pub const DETECTOR_ID: Tag = Tag(0x0018, 0x700A);
/// DateOfLastDetectorCalibration (0018,700C) DA 1
#[rustfmt::skip]
pub const DATE_OF_LAST_DETECTOR_CALIBRATION: Tag = Tag(0x0018, 0x700C);
/// TimeOfLastDetectorCalibration (0018,700E) TM 1
#[rustfmt::skip]
pub const TIME_OF_LAST_DETECTOR_CALIBRATION: Tag = Tag(0x0018, 0x700E);
/// ExposuresOnDetectorSinceLastCalibration (0018,7010) IS 1
#[rustfmt::skip]
pub const EXPOSURES_ON_DETECTOR_SINCE_LAST_CALIBRATION: Tag = Tag(0x0018, 0x7010);
/// ExposuresOnDetectorSinceManufactured (0018,7011) IS 1
#[rustfmt::skip]
pub const EXPOSURES_ON_DETECTOR_SINCE_MANUFACTURED: Tag = Tag(0x0018, 0x7011);
/// DetectorTimeSinceLastExposure (0018,7012) DS 1
#[rustfmt::skip]
pub const DETECTOR_TIME_SINCE_LAST_EXPOSURE: Tag = Tag(0x0018, 0x7012);
/// DetectorActiveTime (0018,7014) DS 1
#[rustfmt::skip]
pub const DETECTOR_ACTIVE_TIME: Tag = Tag(0x0018, 0x7014);
/// DetectorActivationOffsetFromExposure (0018,7016) DS 1
#[rustfmt::skip]
pub const DETECTOR_ACTIVATION_OFFSET_FROM_EXPOSURE: Tag = Tag(0x0018, 0x7016);
/// DetectorBinning (0018,701A) DS 2
#[rustfmt::skip]
pub const DETECTOR_BINNING: Tag = Tag(0x0018, 0x701A);
/// DetectorElementPhysicalSize (0018,7020) DS 2
#[rustfmt::skip]
pub const DETECTOR_ELEMENT_PHYSICAL_SIZE: Tag = Tag(0x0018, 0x7020);
/// DetectorElementSpacing (0018,7022) DS 2
#[rustfmt::skip]
pub const DETECTOR_ELEMENT_SPACING: Tag = Tag(0x0018, 0x7022);
/// DetectorActiveShape (0018,7024) CS 1
#[rustfmt::skip]
pub const DETECTOR_ACTIVE_SHAPE: Tag = Tag(0x0018, 0x7024);
/// DetectorActiveDimensions (0018,7026) DS 1-2
#[rustfmt::skip]
pub const DETECTOR_ACTIVE_DIMENSIONS: Tag = Tag(0x0018, 0x7026);
/// DetectorActiveOrigin (0018,7028) DS 2
#[rustfmt::skip]
pub const DETECTOR_ACTIVE_ORIGIN: Tag = Tag(0x0018, 0x7028);
/// DetectorManufacturerName (0018,702A) LO 1
#[rustfmt::skip]
pub const DETECTOR_MANUFACTURER_NAME: Tag = Tag(0x0018, 0x702A);
/// DetectorManufacturerModelName (0018,702B) LO 1
#[rustfmt::skip]
pub const DETECTOR_MANUFACTURER_MODEL_NAME: Tag = Tag(0x0018, 0x702B);
/// FieldOfViewOrigin (0018,7030) DS 2
#[rustfmt::skip]
pub const FIELD_OF_VIEW_ORIGIN: Tag = Tag(0x0018, 0x7030);
/// FieldOfViewRotation (0018,7032) DS 1
#[rustfmt::skip]
pub const FIELD_OF_VIEW_ROTATION: Tag = Tag(0x0018, 0x7032);
/// FieldOfViewHorizontalFlip (0018,7034) CS 1
#[rustfmt::skip]
pub const FIELD_OF_VIEW_HORIZONTAL_FLIP: Tag = Tag(0x0018, 0x7034);
/// PixelDataAreaOriginRelativeToFOV (0018,7036) FL 2
#[rustfmt::skip]
pub const PIXEL_DATA_AREA_ORIGIN_RELATIVE_TO_FOV: Tag = Tag(0x0018, 0x7036);
/// PixelDataAreaRotationAngleRelativeToFOV (0018,7038) FL 1
#[rustfmt::skip]
pub const PIXEL_DATA_AREA_ROTATION_ANGLE_RELATIVE_TO_FOV: Tag = Tag(0x0018, 0x7038);
/// GridAbsorbingMaterial (0018,7040) LT 1
#[rustfmt::skip]
pub const GRID_ABSORBING_MATERIAL: Tag = Tag(0x0018, 0x7040);
/// GridSpacingMaterial (0018,7041) LT 1
#[rustfmt::skip]
pub const GRID_SPACING_MATERIAL: Tag = Tag(0x0018, 0x7041);
/// GridThickness (0018,7042) DS 1
#[rustfmt::skip]
pub const GRID_THICKNESS: Tag = Tag(0x0018, 0x7042);
/// GridPitch (0018,7044) DS 1
#[rustfmt::skip]
pub const GRID_PITCH: Tag = Tag(0x0018, 0x7044);
/// GridAspectRatio (0018,7046) IS 2
#[rustfmt::skip]
pub const GRID_ASPECT_RATIO: Tag = Tag(0x0018, 0x7046);
/// GridPeriod (0018,7048) DS 1
#[rustfmt::skip]
pub const GRID_PERIOD: Tag = Tag(0x0018, 0x7048);
/// GridFocalDistance (0018,704C) DS 1
#[rustfmt::skip]
pub const GRID_FOCAL_DISTANCE: Tag = Tag(0x0018, 0x704C);
/// FilterMaterial (0018,7050) CS 1-n
#[rustfmt::skip]
pub const FILTER_MATERIAL: Tag = Tag(0x0018, 0x7050);
/// FilterThicknessMinimum (0018,7052) DS 1-n
#[rustfmt::skip]
pub const FILTER_THICKNESS_MINIMUM: Tag = Tag(0x0018, 0x7052);
/// FilterThicknessMaximum (0018,7054) DS 1-n
#[rustfmt::skip]
pub const FILTER_THICKNESS_MAXIMUM: Tag = Tag(0x0018, 0x7054);
/// FilterBeamPathLengthMinimum (0018,7056) FL 1-n
#[rustfmt::skip]
pub const FILTER_BEAM_PATH_LENGTH_MINIMUM: Tag = Tag(0x0018, 0x7056);
/// FilterBeamPathLengthMaximum (0018,7058) FL 1-n
#[rustfmt::skip]
pub const FILTER_BEAM_PATH_LENGTH_MAXIMUM: Tag = Tag(0x0018, 0x7058);
/// ExposureControlMode (0018,7060) CS 1
#[rustfmt::skip]
pub const EXPOSURE_CONTROL_MODE: Tag = Tag(0x0018, 0x7060);
/// ExposureControlModeDescription (0018,7062) LT 1
#[rustfmt::skip]
pub const EXPOSURE_CONTROL_MODE_DESCRIPTION: Tag = Tag(0x0018, 0x7062);
/// ExposureStatus (0018,7064) CS 1
#[rustfmt::skip]
pub const EXPOSURE_STATUS: Tag = Tag(0x0018, 0x7064);
/// PhototimerSetting (0018,7065) DS 1
#[rustfmt::skip]
pub const PHOTOTIMER_SETTING: Tag = Tag(0x0018, 0x7065);
/// ExposureTimeInuS (0018,8150) DS 1
#[rustfmt::skip]
pub const EXPOSURE_TIME_INU_S: Tag = Tag(0x0018, 0x8150);
/// XRayTubeCurrentInuA (0018,8151) DS 1
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT_INU_A: Tag = Tag(0x0018, 0x8151);
/// ContentQualification (0018,9004) CS 1
#[rustfmt::skip]
pub const CONTENT_QUALIFICATION: Tag = Tag(0x0018, 0x9004);
/// PulseSequenceName (0018,9005) SH 1
#[rustfmt::skip]
pub const PULSE_SEQUENCE_NAME: Tag = Tag(0x0018, 0x9005);
/// MRImagingModifierSequence (0018,9006) SQ 1
#[rustfmt::skip]
pub const MR_IMAGING_MODIFIER_SEQUENCE: Tag = Tag(0x0018, 0x9006);
/// EchoPulseSequence (0018,9008) CS 1
#[rustfmt::skip]
pub const ECHO_PULSE_SEQUENCE: Tag = Tag(0x0018, 0x9008);
/// InversionRecovery (0018,9009) CS 1
#[rustfmt::skip]
pub const INVERSION_RECOVERY: Tag = Tag(0x0018, 0x9009);
/// FlowCompensation (0018,9010) CS 1
#[rustfmt::skip]
pub const FLOW_COMPENSATION: Tag = Tag(0x0018, 0x9010);
/// MultipleSpinEcho (0018,9011) CS 1
#[rustfmt::skip]
pub const MULTIPLE_SPIN_ECHO: Tag = Tag(0x0018, 0x9011);
/// MultiPlanarExcitation (0018,9012) CS 1
#[rustfmt::skip]
pub const MULTI_PLANAR_EXCITATION: Tag = Tag(0x0018, 0x9012);
/// PhaseContrast (0018,9014) CS 1
#[rustfmt::skip]
pub const PHASE_CONTRAST: Tag = Tag(0x0018, 0x9014);
/// TimeOfFlightContrast (0018,9015) CS 1
#[rustfmt::skip]
pub const TIME_OF_FLIGHT_CONTRAST: Tag = Tag(0x0018, 0x9015);
/// Spoiling (0018,9016) CS 1
#[rustfmt::skip]
pub const SPOILING: Tag = Tag(0x0018, 0x9016);
/// SteadyStatePulseSequence (0018,9017) CS 1
#[rustfmt::skip]
pub const STEADY_STATE_PULSE_SEQUENCE: Tag = Tag(0x0018, 0x9017);
/// EchoPlanarPulseSequence (0018,9018) CS 1
#[rustfmt::skip]
pub const ECHO_PLANAR_PULSE_SEQUENCE: Tag = Tag(0x0018, 0x9018);
/// TagAngleFirstAxis (0018,9019) FD 1
#[rustfmt::skip]
pub const TAG_ANGLE_FIRST_AXIS: Tag = Tag(0x0018, 0x9019);
/// MagnetizationTransfer (0018,9020) CS 1
#[rustfmt::skip]
pub const MAGNETIZATION_TRANSFER: Tag = Tag(0x0018, 0x9020);
/// T2Preparation (0018,9021) CS 1
#[rustfmt::skip]
pub const T2_PREPARATION: Tag = Tag(0x0018, 0x9021);
/// BloodSignalNulling (0018,9022) CS 1
#[rustfmt::skip]
pub const BLOOD_SIGNAL_NULLING: Tag = Tag(0x0018, 0x9022);
/// SaturationRecovery (0018,9024) CS 1
#[rustfmt::skip]
pub const SATURATION_RECOVERY: Tag = Tag(0x0018, 0x9024);
/// SpectrallySelectedSuppression (0018,9025) CS 1
#[rustfmt::skip]
pub const SPECTRALLY_SELECTED_SUPPRESSION: Tag = Tag(0x0018, 0x9025);
/// SpectrallySelectedExcitation (0018,9026) CS 1
#[rustfmt::skip]
pub const SPECTRALLY_SELECTED_EXCITATION: Tag = Tag(0x0018, 0x9026);
/// SpatialPresaturation (0018,9027) CS 1
#[rustfmt::skip]
pub const SPATIAL_PRESATURATION: Tag = Tag(0x0018, 0x9027);
/// Tagging (0018,9028) CS 1
#[rustfmt::skip]
pub const TAGGING: Tag = Tag(0x0018, 0x9028);
/// OversamplingPhase (0018,9029) CS 1
#[rustfmt::skip]
pub const OVERSAMPLING_PHASE: Tag = Tag(0x0018, 0x9029);
/// TagSpacingFirstDimension (0018,9030) FD 1
#[rustfmt::skip]
pub const TAG_SPACING_FIRST_DIMENSION: Tag = Tag(0x0018, 0x9030);
/// GeometryOfKSpaceTraversal (0018,9032) CS 1
#[rustfmt::skip]
pub const GEOMETRY_OF_K_SPACE_TRAVERSAL: Tag = Tag(0x0018, 0x9032);
/// SegmentedKSpaceTraversal (0018,9033) CS 1
#[rustfmt::skip]
pub const SEGMENTED_K_SPACE_TRAVERSAL: Tag = Tag(0x0018, 0x9033);
/// RectilinearPhaseEncodeReordering (0018,9034) CS 1
#[rustfmt::skip]
pub const RECTILINEAR_PHASE_ENCODE_REORDERING: Tag = Tag(0x0018, 0x9034);
/// TagThickness (0018,9035) FD 1
#[rustfmt::skip]
pub const TAG_THICKNESS: Tag = Tag(0x0018, 0x9035);
/// PartialFourierDirection (0018,9036) CS 1
#[rustfmt::skip]
pub const PARTIAL_FOURIER_DIRECTION: Tag = Tag(0x0018, 0x9036);
/// CardiacSynchronizationTechnique (0018,9037) CS 1
#[rustfmt::skip]
pub const CARDIAC_SYNCHRONIZATION_TECHNIQUE: Tag = Tag(0x0018, 0x9037);
/// ReceiveCoilManufacturerName (0018,9041) LO 1
#[rustfmt::skip]
pub const RECEIVE_COIL_MANUFACTURER_NAME: Tag = Tag(0x0018, 0x9041);
/// MRReceiveCoilSequence (0018,9042) SQ 1
#[rustfmt::skip]
pub const MR_RECEIVE_COIL_SEQUENCE: Tag = Tag(0x0018, 0x9042);
/// ReceiveCoilType (0018,9043) CS 1
#[rustfmt::skip]
pub const RECEIVE_COIL_TYPE: Tag = Tag(0x0018, 0x9043);
/// QuadratureReceiveCoil (0018,9044) CS 1
#[rustfmt::skip]
pub const QUADRATURE_RECEIVE_COIL: Tag = Tag(0x0018, 0x9044);
/// MultiCoilDefinitionSequence (0018,9045) SQ 1
#[rustfmt::skip]
pub const MULTI_COIL_DEFINITION_SEQUENCE: Tag = Tag(0x0018, 0x9045);
/// MultiCoilConfiguration (0018,9046) LO 1
#[rustfmt::skip]
pub const MULTI_COIL_CONFIGURATION: Tag = Tag(0x0018, 0x9046);
/// MultiCoilElementName (0018,9047) SH 1
#[rustfmt::skip]
pub const MULTI_COIL_ELEMENT_NAME: Tag = Tag(0x0018, 0x9047);
/// MultiCoilElementUsed (0018,9048) CS 1
#[rustfmt::skip]
pub const MULTI_COIL_ELEMENT_USED: Tag = Tag(0x0018, 0x9048);
/// MRTransmitCoilSequence (0018,9049) SQ 1
#[rustfmt::skip]
pub const MR_TRANSMIT_COIL_SEQUENCE: Tag = Tag(0x0018, 0x9049);
/// TransmitCoilManufacturerName (0018,9050) LO 1
#[rustfmt::skip]
pub const TRANSMIT_COIL_MANUFACTURER_NAME: Tag = Tag(0x0018, 0x9050);
/// TransmitCoilType (0018,9051) CS 1
#[rustfmt::skip]
pub const TRANSMIT_COIL_TYPE: Tag = Tag(0x0018, 0x9051);
/// SpectralWidth (0018,9052) FD 1-2
#[rustfmt::skip]
pub const SPECTRAL_WIDTH: Tag = Tag(0x0018, 0x9052);
/// ChemicalShiftReference (0018,9053) FD 1-2
#[rustfmt::skip]
pub const CHEMICAL_SHIFT_REFERENCE: Tag = Tag(0x0018, 0x9053);
/// VolumeLocalizationTechnique (0018,9054) CS 1
#[rustfmt::skip]
pub const VOLUME_LOCALIZATION_TECHNIQUE: Tag = Tag(0x0018, 0x9054);
/// MRAcquisitionFrequencyEncodingSteps (0018,9058) US 1
#[rustfmt::skip]
pub const MR_ACQUISITION_FREQUENCY_ENCODING_STEPS: Tag = Tag(0x0018, 0x9058);
/// Decoupling (0018,9059) CS 1
#[rustfmt::skip]
pub const DECOUPLING: Tag = Tag(0x0018, 0x9059);
/// DecoupledNucleus (0018,9060) CS 1-2
#[rustfmt::skip]
pub const DECOUPLED_NUCLEUS: Tag = Tag(0x0018, 0x9060);
/// DecouplingFrequency (0018,9061) FD 1-2
#[rustfmt::skip]
pub const DECOUPLING_FREQUENCY: Tag = Tag(0x0018, 0x9061);
/// DecouplingMethod (0018,9062) CS 1
#[rustfmt::skip]
pub const DECOUPLING_METHOD: Tag = Tag(0x0018, 0x9062);
/// DecouplingChemicalShiftReference (0018,9063) FD 1-2
#[rustfmt::skip]
pub const DECOUPLING_CHEMICAL_SHIFT_REFERENCE: Tag = Tag(0x0018, 0x9063);
/// KSpaceFiltering (0018,9064) CS 1
#[rustfmt::skip]
pub const K_SPACE_FILTERING: Tag = Tag(0x0018, 0x9064);
/// TimeDomainFiltering (0018,9065) CS 1-2
#[rustfmt::skip]
pub const TIME_DOMAIN_FILTERING: Tag = Tag(0x0018, 0x9065);
/// NumberOfZeroFills (0018,9066) US 1-2
#[rustfmt::skip]
pub const NUMBER_OF_ZERO_FILLS: Tag = Tag(0x0018, 0x9066);
/// BaselineCorrection (0018,9067) CS 1
#[rustfmt::skip]
pub const BASELINE_CORRECTION: Tag = Tag(0x0018, 0x9067);
/// ParallelReductionFactorInPlane (0018,9069) FD 1
#[rustfmt::skip]
pub const PARALLEL_REDUCTION_FACTOR_IN_PLANE: Tag = Tag(0x0018, 0x9069);
/// AcquisitionDuration (0018,9073) FD 1
#[rustfmt::skip]
pub const ACQUISITION_DURATION: Tag = Tag(0x0018, 0x9073);
/// FrameAcquisitionDateTime (0018,9074) DT 1
#[rustfmt::skip]
pub const FRAME_ACQUISITION_DATE_TIME: Tag = Tag(0x0018, 0x9074);
/// DiffusionDirectionality (0018,9075) CS 1
#[rustfmt::skip]
pub const DIFFUSION_DIRECTIONALITY: Tag = Tag(0x0018, 0x9075);
/// DiffusionGradientDirectionSequence (0018,9076) SQ 1
#[rustfmt::skip]
pub const DIFFUSION_GRADIENT_DIRECTION_SEQUENCE: Tag = Tag(0x0018, 0x9076);
/// ParallelAcquisition (0018,9077) CS 1
#[rustfmt::skip]
pub const PARALLEL_ACQUISITION: Tag = Tag(0x0018, 0x9077);
/// ParallelAcquisitionTechnique (0018,9078) CS 1
#[rustfmt::skip]
pub const PARALLEL_ACQUISITION_TECHNIQUE: Tag = Tag(0x0018, 0x9078);
/// InversionTimes (0018,9079) FD 1-n
#[rustfmt::skip]
pub const INVERSION_TIMES: Tag = Tag(0x0018, 0x9079);
/// MetaboliteMapDescription (0018,9080) ST 1
#[rustfmt::skip]
pub const METABOLITE_MAP_DESCRIPTION: Tag = Tag(0x0018, 0x9080);
/// PartialFourier (0018,9081) CS 1
#[rustfmt::skip]
pub const PARTIAL_FOURIER: Tag = Tag(0x0018, 0x9081);
/// EffectiveEchoTime (0018,9082) FD 1
#[rustfmt::skip]
pub const EFFECTIVE_ECHO_TIME: Tag = Tag(0x0018, 0x9082);
/// MetaboliteMapCodeSequence (0018,9083) SQ 1
#[rustfmt::skip]
pub const METABOLITE_MAP_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9083);
/// ChemicalShiftSequence (0018,9084) SQ 1
#[rustfmt::skip]
pub const CHEMICAL_SHIFT_SEQUENCE: Tag = Tag(0x0018, 0x9084);
/// CardiacSignalSource (0018,9085) CS 1
#[rustfmt::skip]
pub const CARDIAC_SIGNAL_SOURCE: Tag = Tag(0x0018, 0x9085);
/// DiffusionBValue (0018,9087) FD 1
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE: Tag = Tag(0x0018, 0x9087);
/// DiffusionGradientOrientation (0018,9089) FD 3
#[rustfmt::skip]
pub const DIFFUSION_GRADIENT_ORIENTATION: Tag = Tag(0x0018, 0x9089);
/// VelocityEncodingDirection (0018,9090) FD 3
#[rustfmt::skip]
pub const VELOCITY_ENCODING_DIRECTION: Tag = Tag(0x0018, 0x9090);
/// VelocityEncodingMinimumValue (0018,9091) FD 1
#[rustfmt::skip]
pub const VELOCITY_ENCODING_MINIMUM_VALUE: Tag = Tag(0x0018, 0x9091);
/// VelocityEncodingAcquisitionSequence (0018,9092) SQ 1
#[rustfmt::skip]
pub const VELOCITY_ENCODING_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9092);
/// NumberOfKSpaceTrajectories (0018,9093) US 1
#[rustfmt::skip]
pub const NUMBER_OF_K_SPACE_TRAJECTORIES: Tag = Tag(0x0018, 0x9093);
/// CoverageOfKSpace (0018,9094) CS 1
#[rustfmt::skip]
pub const COVERAGE_OF_K_SPACE: Tag = Tag(0x0018, 0x9094);
/// SpectroscopyAcquisitionPhaseRows (0018,9095) UL 1
#[rustfmt::skip]
pub const SPECTROSCOPY_ACQUISITION_PHASE_ROWS: Tag = Tag(0x0018, 0x9095);
/// ParallelReductionFactorInPlaneRetired (0018,9096) FD 1
#[rustfmt::skip]
pub const PARALLEL_REDUCTION_FACTOR_IN_PLANE_RETIRED: Tag = Tag(0x0018, 0x9096);
/// TransmitterFrequency (0018,9098) FD 1-2
#[rustfmt::skip]
pub const TRANSMITTER_FREQUENCY: Tag = Tag(0x0018, 0x9098);
/// ResonantNucleus (0018,9100) CS 1-2
#[rustfmt::skip]
pub const RESONANT_NUCLEUS: Tag = Tag(0x0018, 0x9100);
/// FrequencyCorrection (0018,9101) CS 1
#[rustfmt::skip]
pub const FREQUENCY_CORRECTION: Tag = Tag(0x0018, 0x9101);
/// MRSpectroscopyFOVGeometrySequence (0018,9103) SQ 1
#[rustfmt::skip]
pub const MR_SPECTROSCOPY_FOV_GEOMETRY_SEQUENCE: Tag = Tag(0x0018, 0x9103);
/// SlabThickness (0018,9104) FD 1
#[rustfmt::skip]
pub const SLAB_THICKNESS: Tag = Tag(0x0018, 0x9104);
/// SlabOrientation (0018,9105) FD 3
#[rustfmt::skip]
pub const SLAB_ORIENTATION: Tag = Tag(0x0018, 0x9105);
/// MidSlabPosition (0018,9106) FD 3
#[rustfmt::skip]
pub const MID_SLAB_POSITION: Tag = Tag(0x0018, 0x9106);
/// MRSpatialSaturationSequence (0018,9107) SQ 1
#[rustfmt::skip]
pub const MR_SPATIAL_SATURATION_SEQUENCE: Tag = Tag(0x0018, 0x9107);
/// MRTimingAndRelatedParametersSequence (0018,9112) SQ 1
#[rustfmt::skip]
pub const MR_TIMING_AND_RELATED_PARAMETERS_SEQUENCE: Tag = Tag(0x0018, 0x9112);
/// MREchoSequence (0018,9114) SQ 1
#[rustfmt::skip]
pub const MR_ECHO_SEQUENCE: Tag = Tag(0x0018, 0x9114);
/// MRModifierSequence (0018,9115) SQ 1
#[rustfmt::skip]
pub const MR_MODIFIER_SEQUENCE: Tag = Tag(0x0018, 0x9115);
/// MRDiffusionSequence (0018,9117) SQ 1
#[rustfmt::skip]
pub const MR_DIFFUSION_SEQUENCE: Tag = Tag(0x0018, 0x9117);
/// CardiacSynchronizationSequence (0018,9118) SQ 1
#[rustfmt::skip]
pub const CARDIAC_SYNCHRONIZATION_SEQUENCE: Tag = Tag(0x0018, 0x9118);
/// MRAveragesSequence (0018,9119) SQ 1
#[rustfmt::skip]
pub const MR_AVERAGES_SEQUENCE: Tag = Tag(0x0018, 0x9119);
/// MRFOVGeometrySequence (0018,9125) SQ 1
#[rustfmt::skip]
pub const MRFOV_GEOMETRY_SEQUENCE: Tag = Tag(0x0018, 0x9125);
/// VolumeLocalizationSequence (0018,9126) SQ 1
#[rustfmt::skip]
pub const VOLUME_LOCALIZATION_SEQUENCE: Tag = Tag(0x0018, 0x9126);
/// SpectroscopyAcquisitionDataColumns (0018,9127) UL 1
#[rustfmt::skip]
pub const SPECTROSCOPY_ACQUISITION_DATA_COLUMNS: Tag = Tag(0x0018, 0x9127);
/// DiffusionAnisotropyType (0018,9147) CS 1
#[rustfmt::skip]
pub const DIFFUSION_ANISOTROPY_TYPE: Tag = Tag(0x0018, 0x9147);
/// FrameReferenceDateTime (0018,9151) DT 1
#[rustfmt::skip]
pub const FRAME_REFERENCE_DATE_TIME: Tag = Tag(0x0018, 0x9151);
/// MRMetaboliteMapSequence (0018,9152) SQ 1
#[rustfmt::skip]
pub const MR_METABOLITE_MAP_SEQUENCE: Tag = Tag(0x0018, 0x9152);
/// ParallelReductionFactorOutOfPlane (0018,9155) FD 1
#[rustfmt::skip]
pub const PARALLEL_REDUCTION_FACTOR_OUT_OF_PLANE: Tag = Tag(0x0018, 0x9155);
/// SpectroscopyAcquisitionOutOfPlanePhaseSteps (0018,9159) UL 1
#[rustfmt::skip]
pub const SPECTROSCOPY_ACQUISITION_OUT_OF_PLANE_PHASE_STEPS: Tag = Tag(0x0018, 0x9159);
/// BulkMotionStatus (0018,9166) CS 1
#[rustfmt::skip]
pub const BULK_MOTION_STATUS: Tag = Tag(0x0018, 0x9166);
/// ParallelReductionFactorSecondInPlane (0018,9168) FD 1
#[rustfmt::skip]
pub const PARALLEL_REDUCTION_FACTOR_SECOND_IN_PLANE: Tag = Tag(0x0018, 0x9168);
/// CardiacBeatRejectionTechnique (0018,9169) CS 1
#[rustfmt::skip]
pub const CARDIAC_BEAT_REJECTION_TECHNIQUE: Tag = Tag(0x0018, 0x9169);
/// RespiratoryMotionCompensationTechnique (0018,9170) CS 1
#[rustfmt::skip]
pub const RESPIRATORY_MOTION_COMPENSATION_TECHNIQUE: Tag = Tag(0x0018, 0x9170);
/// RespiratorySignalSource (0018,9171) CS 1
#[rustfmt::skip]
pub const RESPIRATORY_SIGNAL_SOURCE: Tag = Tag(0x0018, 0x9171);
/// BulkMotionCompensationTechnique (0018,9172) CS 1
#[rustfmt::skip]
pub const BULK_MOTION_COMPENSATION_TECHNIQUE: Tag = Tag(0x0018, 0x9172);
/// BulkMotionSignalSource (0018,9173) CS 1
#[rustfmt::skip]
pub const BULK_MOTION_SIGNAL_SOURCE: Tag = Tag(0x0018, 0x9173);
/// ApplicableSafetyStandardAgency (0018,9174) CS 1
#[rustfmt::skip]
pub const APPLICABLE_SAFETY_STANDARD_AGENCY: Tag = Tag(0x0018, 0x9174);
/// ApplicableSafetyStandardDescription (0018,9175) LO 1
#[rustfmt::skip]
pub const APPLICABLE_SAFETY_STANDARD_DESCRIPTION: Tag = Tag(0x0018, 0x9175);
/// OperatingModeSequence (0018,9176) SQ 1
#[rustfmt::skip]
pub const OPERATING_MODE_SEQUENCE: Tag = Tag(0x0018, 0x9176);
/// OperatingModeType (0018,9177) CS 1
#[rustfmt::skip]
pub const OPERATING_MODE_TYPE: Tag = Tag(0x0018, 0x9177);
/// OperatingMode (0018,9178) CS 1
#[rustfmt::skip]
pub const OPERATING_MODE: Tag = Tag(0x0018, 0x9178);
/// SpecificAbsorptionRateDefinition (0018,9179) CS 1
#[rustfmt::skip]
pub const SPECIFIC_ABSORPTION_RATE_DEFINITION: Tag = Tag(0x0018, 0x9179);
/// GradientOutputType (0018,9180) CS 1
#[rustfmt::skip]
pub const GRADIENT_OUTPUT_TYPE: Tag = Tag(0x0018, 0x9180);
/// SpecificAbsorptionRateValue (0018,9181) FD 1
#[rustfmt::skip]
pub const SPECIFIC_ABSORPTION_RATE_VALUE: Tag = Tag(0x0018, 0x9181);
/// GradientOutput (0018,9182) FD 1
#[rustfmt::skip]
pub const GRADIENT_OUTPUT: Tag = Tag(0x0018, 0x9182);
/// FlowCompensationDirection (0018,9183) CS 1
#[rustfmt::skip]
pub const FLOW_COMPENSATION_DIRECTION: Tag = Tag(0x0018, 0x9183);
/// TaggingDelay (0018,9184) FD 1
#[rustfmt::skip]
pub const TAGGING_DELAY: Tag = Tag(0x0018, 0x9184);
/// RespiratoryMotionCompensationTechniqueDescription (0018,9185) ST 1
#[rustfmt::skip]
pub const RESPIRATORY_MOTION_COMPENSATION_TECHNIQUE_DESCRIPTION: Tag = Tag(0x0018, 0x9185);
/// RespiratorySignalSourceID (0018,9186) SH 1
#[rustfmt::skip]
pub const RESPIRATORY_SIGNAL_SOURCE_ID: Tag = Tag(0x0018, 0x9186);
/// ChemicalShiftMinimumIntegrationLimitInHz (0018,9195) FD 1
#[rustfmt::skip]
pub const CHEMICAL_SHIFT_MINIMUM_INTEGRATION_LIMIT_IN_HZ: Tag = Tag(0x0018, 0x9195);
/// ChemicalShiftMaximumIntegrationLimitInHz (0018,9196) FD 1
#[rustfmt::skip]
pub const CHEMICAL_SHIFT_MAXIMUM_INTEGRATION_LIMIT_IN_HZ: Tag = Tag(0x0018, 0x9196);
/// MRVelocityEncodingSequence (0018,9197) SQ 1
#[rustfmt::skip]
pub const MR_VELOCITY_ENCODING_SEQUENCE: Tag = Tag(0x0018, 0x9197);
/// FirstOrderPhaseCorrection (0018,9198) CS 1
#[rustfmt::skip]
pub const FIRST_ORDER_PHASE_CORRECTION: Tag = Tag(0x0018, 0x9198);
/// WaterReferencedPhaseCorrection (0018,9199) CS 1
#[rustfmt::skip]
pub const WATER_REFERENCED_PHASE_CORRECTION: Tag = Tag(0x0018, 0x9199);
/// MRSpectroscopyAcquisitionType (0018,9200) CS 1
#[rustfmt::skip]
pub const MR_SPECTROSCOPY_ACQUISITION_TYPE: Tag = Tag(0x0018, 0x9200);
/// RespiratoryCyclePosition (0018,9214) CS 1
#[rustfmt::skip]
pub const RESPIRATORY_CYCLE_POSITION: Tag = Tag(0x0018, 0x9214);
/// VelocityEncodingMaximumValue (0018,9217) FD 1
#[rustfmt::skip]
pub const VELOCITY_ENCODING_MAXIMUM_VALUE: Tag = Tag(0x0018, 0x9217);
/// TagSpacingSecondDimension (0018,9218) FD 1
#[rustfmt::skip]
pub const TAG_SPACING_SECOND_DIMENSION: Tag = Tag(0x0018, 0x9218);
/// TagAngleSecondAxis (0018,9219) SS 1
#[rustfmt::skip]
pub const TAG_ANGLE_SECOND_AXIS: Tag = Tag(0x0018, 0x9219);
/// FrameAcquisitionDuration (0018,9220) FD 1
#[rustfmt::skip]
pub const FRAME_ACQUISITION_DURATION: Tag = Tag(0x0018, 0x9220);
/// MRImageFrameTypeSequence (0018,9226) SQ 1
#[rustfmt::skip]
pub const MR_IMAGE_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9226);
/// MRSpectroscopyFrameTypeSequence (0018,9227) SQ 1
#[rustfmt::skip]
pub const MR_SPECTROSCOPY_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9227);
/// MRAcquisitionPhaseEncodingStepsInPlane (0018,9231) US 1
#[rustfmt::skip]
pub const MR_ACQUISITION_PHASE_ENCODING_STEPS_IN_PLANE: Tag = Tag(0x0018, 0x9231);
/// MRAcquisitionPhaseEncodingStepsOutOfPlane (0018,9232) US 1
#[rustfmt::skip]
pub const MR_ACQUISITION_PHASE_ENCODING_STEPS_OUT_OF_PLANE: Tag = Tag(0x0018, 0x9232);
/// SpectroscopyAcquisitionPhaseColumns (0018,9234) UL 1
#[rustfmt::skip]
pub const SPECTROSCOPY_ACQUISITION_PHASE_COLUMNS: Tag = Tag(0x0018, 0x9234);
/// CardiacCyclePosition (0018,9236) CS 1
#[rustfmt::skip]
pub const CARDIAC_CYCLE_POSITION: Tag = Tag(0x0018, 0x9236);
/// SpecificAbsorptionRateSequence (0018,9239) SQ 1
#[rustfmt::skip]
pub const SPECIFIC_ABSORPTION_RATE_SEQUENCE: Tag = Tag(0x0018, 0x9239);
/// RFEchoTrainLength (0018,9240) US 1
#[rustfmt::skip]
pub const RF_ECHO_TRAIN_LENGTH: Tag = Tag(0x0018, 0x9240);
/// GradientEchoTrainLength (0018,9241) US 1
#[rustfmt::skip]
pub const GRADIENT_ECHO_TRAIN_LENGTH: Tag = Tag(0x0018, 0x9241);
/// ArterialSpinLabelingContrast (0018,9250) CS 1
#[rustfmt::skip]
pub const ARTERIAL_SPIN_LABELING_CONTRAST: Tag = Tag(0x0018, 0x9250);
/// MRArterialSpinLabelingSequence (0018,9251) SQ 1
#[rustfmt::skip]
pub const MR_ARTERIAL_SPIN_LABELING_SEQUENCE: Tag = Tag(0x0018, 0x9251);
/// ASLTechniqueDescription (0018,9252) LO 1
#[rustfmt::skip]
pub const ASL_TECHNIQUE_DESCRIPTION: Tag = Tag(0x0018, 0x9252);
/// ASLSlabNumber (0018,9253) US 1
#[rustfmt::skip]
pub const ASL_SLAB_NUMBER: Tag = Tag(0x0018, 0x9253);
/// ASLSlabThickness (0018,9254) FD 1
#[rustfmt::skip]
pub const ASL_SLAB_THICKNESS: Tag = Tag(0x0018, 0x9254);
/// ASLSlabOrientation (0018,9255) FD 3
#[rustfmt::skip]
pub const ASL_SLAB_ORIENTATION: Tag = Tag(0x0018, 0x9255);
/// ASLMidSlabPosition (0018,9256) FD 3
#[rustfmt::skip]
pub const ASL_MID_SLAB_POSITION: Tag = Tag(0x0018, 0x9256);
/// ASLContext (0018,9257) CS 1
#[rustfmt::skip]
pub const ASL_CONTEXT: Tag = Tag(0x0018, 0x9257);
/// ASLPulseTrainDuration (0018,9258) UL 1
#[rustfmt::skip]
pub const ASL_PULSE_TRAIN_DURATION: Tag = Tag(0x0018, 0x9258);
/// ASLCrusherFlag (0018,9259) CS 1
#[rustfmt::skip]
pub const ASL_CRUSHER_FLAG: Tag = Tag(0x0018, 0x9259);
/// ASLCrusherFlowLimit (0018,925A) FD 1
#[rustfmt::skip]
pub const ASL_CRUSHER_FLOW_LIMIT: Tag = Tag(0x0018, 0x925A);
/// ASLCrusherDescription (0018,925B) LO 1
#[rustfmt::skip]
pub const ASL_CRUSHER_DESCRIPTION: Tag = Tag(0x0018, 0x925B);
/// ASLBolusCutoffFlag (0018,925C) CS 1
#[rustfmt::skip]
pub const ASL_BOLUS_CUTOFF_FLAG: Tag = Tag(0x0018, 0x925C);
/// ASLBolusCutoffTimingSequence (0018,925D) SQ 1
#[rustfmt::skip]
pub const ASL_BOLUS_CUTOFF_TIMING_SEQUENCE: Tag = Tag(0x0018, 0x925D);
/// ASLBolusCutoffTechnique (0018,925E) LO 1
#[rustfmt::skip]
pub const ASL_BOLUS_CUTOFF_TECHNIQUE: Tag = Tag(0x0018, 0x925E);
/// ASLBolusCutoffDelayTime (0018,925F) UL 1
#[rustfmt::skip]
pub const ASL_BOLUS_CUTOFF_DELAY_TIME: Tag = Tag(0x0018, 0x925F);
/// ASLSlabSequence (0018,9260) SQ 1
#[rustfmt::skip]
pub const ASL_SLAB_SEQUENCE: Tag = Tag(0x0018, 0x9260);
/// ChemicalShiftMinimumIntegrationLimitInppm (0018,9295) FD 1
#[rustfmt::skip]
pub const CHEMICAL_SHIFT_MINIMUM_INTEGRATION_LIMIT_INPPM: Tag = Tag(0x0018, 0x9295);
/// ChemicalShiftMaximumIntegrationLimitInppm (0018,9296) FD 1
#[rustfmt::skip]
pub const CHEMICAL_SHIFT_MAXIMUM_INTEGRATION_LIMIT_INPPM: Tag = Tag(0x0018, 0x9296);
/// WaterReferenceAcquisition (0018,9297) CS 1
#[rustfmt::skip]
pub const WATER_REFERENCE_ACQUISITION: Tag = Tag(0x0018, 0x9297);
/// EchoPeakPosition (0018,9298) IS 1
#[rustfmt::skip]
pub const ECHO_PEAK_POSITION: Tag = Tag(0x0018, 0x9298);
/// CTAcquisitionTypeSequence (0018,9301) SQ 1
#[rustfmt::skip]
pub const CT_ACQUISITION_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9301);
/// AcquisitionType (0018,9302) CS 1
#[rustfmt::skip]
pub const ACQUISITION_TYPE: Tag = Tag(0x0018, 0x9302);
/// TubeAngle (0018,9303) FD 1
#[rustfmt::skip]
pub const TUBE_ANGLE: Tag = Tag(0x0018, 0x9303);
/// CTAcquisitionDetailsSequence (0018,9304) SQ 1
#[rustfmt::skip]
pub const CT_ACQUISITION_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x9304);
/// RevolutionTime (0018,9305) FD 1
#[rustfmt::skip]
pub const REVOLUTION_TIME: Tag = Tag(0x0018, 0x9305);
/// SingleCollimationWidth (0018,9306) FD 1
#[rustfmt::skip]
pub const SINGLE_COLLIMATION_WIDTH: Tag = Tag(0x0018, 0x9306);
/// TotalCollimationWidth (0018,9307) FD 1
#[rustfmt::skip]
pub const TOTAL_COLLIMATION_WIDTH: Tag = Tag(0x0018, 0x9307);
/// CTTableDynamicsSequence (0018,9308) SQ 1
#[rustfmt::skip]
pub const CT_TABLE_DYNAMICS_SEQUENCE: Tag = Tag(0x0018, 0x9308);
/// TableSpeed (0018,9309) FD 1
#[rustfmt::skip]
pub const TABLE_SPEED: Tag = Tag(0x0018, 0x9309);
/// TableFeedPerRotation (0018,9310) FD 1
#[rustfmt::skip]
pub const TABLE_FEED_PER_ROTATION: Tag = Tag(0x0018, 0x9310);
/// SpiralPitchFactor (0018,9311) FD 1
#[rustfmt::skip]
pub const SPIRAL_PITCH_FACTOR: Tag = Tag(0x0018, 0x9311);
/// CTGeometrySequence (0018,9312) SQ 1
#[rustfmt::skip]
pub const CT_GEOMETRY_SEQUENCE: Tag = Tag(0x0018, 0x9312);
/// DataCollectionCenterPatient (0018,9313) FD 3
#[rustfmt::skip]
pub const DATA_COLLECTION_CENTER_PATIENT: Tag = Tag(0x0018, 0x9313);
/// CTReconstructionSequence (0018,9314) SQ 1
#[rustfmt::skip]
pub const CT_RECONSTRUCTION_SEQUENCE: Tag = Tag(0x0018, 0x9314);
/// ReconstructionAlgorithm (0018,9315) CS 1
#[rustfmt::skip]
pub const RECONSTRUCTION_ALGORITHM: Tag = Tag(0x0018, 0x9315);
/// ConvolutionKernelGroup (0018,9316) CS 1
#[rustfmt::skip]
pub const CONVOLUTION_KERNEL_GROUP: Tag = Tag(0x0018, 0x9316);
/// ReconstructionFieldOfView (0018,9317) FD 2
#[rustfmt::skip]
pub const RECONSTRUCTION_FIELD_OF_VIEW: Tag = Tag(0x0018, 0x9317);
/// ReconstructionTargetCenterPatient (0018,9318) FD 3
#[rustfmt::skip]
pub const RECONSTRUCTION_TARGET_CENTER_PATIENT: Tag = Tag(0x0018, 0x9318);
/// ReconstructionAngle (0018,9319) FD 1
#[rustfmt::skip]
pub const RECONSTRUCTION_ANGLE: Tag = Tag(0x0018, 0x9319);
/// ImageFilter (0018,9320) SH 1
#[rustfmt::skip]
pub const IMAGE_FILTER: Tag = Tag(0x0018, 0x9320);
/// CTExposureSequence (0018,9321) SQ 1
#[rustfmt::skip]
pub const CT_EXPOSURE_SEQUENCE: Tag = Tag(0x0018, 0x9321);
/// ReconstructionPixelSpacing (0018,9322) FD 2
#[rustfmt::skip]
pub const RECONSTRUCTION_PIXEL_SPACING: Tag = Tag(0x0018, 0x9322);
/// ExposureModulationType (0018,9323) CS 1-n
#[rustfmt::skip]
pub const EXPOSURE_MODULATION_TYPE: Tag = Tag(0x0018, 0x9323);
/// EstimatedDoseSaving (0018,9324) FD 1
#[rustfmt::skip]
pub const ESTIMATED_DOSE_SAVING: Tag = Tag(0x0018, 0x9324);
/// CTXRayDetailsSequence (0018,9325) SQ 1
#[rustfmt::skip]
pub const CTX_RAY_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x9325);
/// CTPositionSequence (0018,9326) SQ 1
#[rustfmt::skip]
pub const CT_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9326);
/// TablePosition (0018,9327) FD 1
#[rustfmt::skip]
pub const TABLE_POSITION: Tag = Tag(0x0018, 0x9327);
/// ExposureTimeInms (0018,9328) FD 1
#[rustfmt::skip]
pub const EXPOSURE_TIME_INMS: Tag = Tag(0x0018, 0x9328);
/// CTImageFrameTypeSequence (0018,9329) SQ 1
#[rustfmt::skip]
pub const CT_IMAGE_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9329);
/// XRayTubeCurrentInmA (0018,9330) FD 1
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT_INM_A: Tag = Tag(0x0018, 0x9330);
/// ExposureInmAs (0018,9332) FD 1
#[rustfmt::skip]
pub const EXPOSURE_INM_AS: Tag = Tag(0x0018, 0x9332);
/// ConstantVolumeFlag (0018,9333) CS 1
#[rustfmt::skip]
pub const CONSTANT_VOLUME_FLAG: Tag = Tag(0x0018, 0x9333);
/// FluoroscopyFlag (0018,9334) CS 1
#[rustfmt::skip]
pub const FLUOROSCOPY_FLAG: Tag = Tag(0x0018, 0x9334);
/// DistanceSourceToDataCollectionCenter (0018,9335) FD 1
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_DATA_COLLECTION_CENTER: Tag = Tag(0x0018, 0x9335);
/// ContrastBolusAgentNumber (0018,9337) US 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT_NUMBER: Tag = Tag(0x0018, 0x9337);
/// ContrastBolusIngredientCodeSequence (0018,9338) SQ 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_INGREDIENT_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9338);
/// ContrastAdministrationProfileSequence (0018,9340) SQ 1
#[rustfmt::skip]
pub const CONTRAST_ADMINISTRATION_PROFILE_SEQUENCE: Tag = Tag(0x0018, 0x9340);
/// ContrastBolusUsageSequence (0018,9341) SQ 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_USAGE_SEQUENCE: Tag = Tag(0x0018, 0x9341);
/// ContrastBolusAgentAdministered (0018,9342) CS 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT_ADMINISTERED: Tag = Tag(0x0018, 0x9342);
/// ContrastBolusAgentDetected (0018,9343) CS 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT_DETECTED: Tag = Tag(0x0018, 0x9343);
/// ContrastBolusAgentPhase (0018,9344) CS 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT_PHASE: Tag = Tag(0x0018, 0x9344);
/// CTDIvol (0018,9345) FD 1
#[rustfmt::skip]
pub const CTD_IVOL: Tag = Tag(0x0018, 0x9345);
/// CTDIPhantomTypeCodeSequence (0018,9346) SQ 1
#[rustfmt::skip]
pub const CTDI_PHANTOM_TYPE_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9346);
/// CalciumScoringMassFactorPatient (0018,9351) FL 1
#[rustfmt::skip]
pub const CALCIUM_SCORING_MASS_FACTOR_PATIENT: Tag = Tag(0x0018, 0x9351);
/// CalciumScoringMassFactorDevice (0018,9352) FL 3
#[rustfmt::skip]
pub const CALCIUM_SCORING_MASS_FACTOR_DEVICE: Tag = Tag(0x0018, 0x9352);
/// EnergyWeightingFactor (0018,9353) FL 1
#[rustfmt::skip]
pub const ENERGY_WEIGHTING_FACTOR: Tag = Tag(0x0018, 0x9353);
/// CTAdditionalXRaySourceSequence (0018,9360) SQ 1
#[rustfmt::skip]
pub const CT_ADDITIONAL_X_RAY_SOURCE_SEQUENCE: Tag = Tag(0x0018, 0x9360);
/// ProjectionPixelCalibrationSequence (0018,9401) SQ 1
#[rustfmt::skip]
pub const PROJECTION_PIXEL_CALIBRATION_SEQUENCE: Tag = Tag(0x0018, 0x9401);
/// DistanceSourceToIsocenter (0018,9402) FL 1
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_ISOCENTER: Tag = Tag(0x0018, 0x9402);
/// DistanceObjectToTableTop (0018,9403) FL 1
#[rustfmt::skip]
pub const DISTANCE_OBJECT_TO_TABLE_TOP: Tag = Tag(0x0018, 0x9403);
/// ObjectPixelSpacingInCenterOfBeam (0018,9404) FL 2
#[rustfmt::skip]
pub const OBJECT_PIXEL_SPACING_IN_CENTER_OF_BEAM: Tag = Tag(0x0018, 0x9404);
/// PositionerPositionSequence (0018,9405) SQ 1
#[rustfmt::skip]
pub const POSITIONER_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9405);
/// TablePositionSequence (0018,9406) SQ 1
#[rustfmt::skip]
pub const TABLE_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9406);
/// CollimatorShapeSequence (0018,9407) SQ 1
#[rustfmt::skip]
pub const COLLIMATOR_SHAPE_SEQUENCE: Tag = Tag(0x0018, 0x9407);
/// PlanesInAcquisition (0018,9410) CS 1
#[rustfmt::skip]
pub const PLANES_IN_ACQUISITION: Tag = Tag(0x0018, 0x9410);
/// XAXRFFrameCharacteristicsSequence (0018,9412) SQ 1
#[rustfmt::skip]
pub const XAXRF_FRAME_CHARACTERISTICS_SEQUENCE: Tag = Tag(0x0018, 0x9412);
/// FrameAcquisitionSequence (0018,9417) SQ 1
#[rustfmt::skip]
pub const FRAME_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9417);
/// XRayReceptorType (0018,9420) CS 1
#[rustfmt::skip]
pub const X_RAY_RECEPTOR_TYPE: Tag = Tag(0x0018, 0x9420);
/// AcquisitionProtocolName (0018,9423) LO 1
#[rustfmt::skip]
pub const ACQUISITION_PROTOCOL_NAME: Tag = Tag(0x0018, 0x9423);
/// AcquisitionProtocolDescription (0018,9424) LT 1
#[rustfmt::skip]
pub const ACQUISITION_PROTOCOL_DESCRIPTION: Tag = Tag(0x0018, 0x9424);
/// ContrastBolusIngredientOpaque (0018,9425) CS 1
#[rustfmt::skip]
pub const CONTRAST_BOLUS_INGREDIENT_OPAQUE: Tag = Tag(0x0018, 0x9425);
/// DistanceReceptorPlaneToDetectorHousing (0018,9426) FL 1
#[rustfmt::skip]
pub const DISTANCE_RECEPTOR_PLANE_TO_DETECTOR_HOUSING: Tag = Tag(0x0018, 0x9426);
/// IntensifierActiveShape (0018,9427) CS 1
#[rustfmt::skip]
pub const INTENSIFIER_ACTIVE_SHAPE: Tag = Tag(0x0018, 0x9427);
/// IntensifierActiveDimensions (0018,9428) FL 1-2
#[rustfmt::skip]
pub const INTENSIFIER_ACTIVE_DIMENSIONS: Tag = Tag(0x0018, 0x9428);
/// PhysicalDetectorSize (0018,9429) FL 2
#[rustfmt::skip]
pub const PHYSICAL_DETECTOR_SIZE: Tag = Tag(0x0018, 0x9429);
/// PositionOfIsocenterProjection (0018,9430) FL 2
#[rustfmt::skip]
pub const POSITION_OF_ISOCENTER_PROJECTION: Tag = Tag(0x0018, 0x9430);
/// FieldOfViewSequence (0018,9432) SQ 1
#[rustfmt::skip]
pub const FIELD_OF_VIEW_SEQUENCE: Tag = Tag(0x0018, 0x9432);
/// FieldOfViewDescription (0018,9433) LO 1
#[rustfmt::skip]
pub const FIELD_OF_VIEW_DESCRIPTION: Tag = Tag(0x0018, 0x9433);
/// ExposureControlSensingRegionsSequence (0018,9434) SQ 1
#[rustfmt::skip]
pub const EXPOSURE_CONTROL_SENSING_REGIONS_SEQUENCE: Tag = Tag(0x0018, 0x9434);
/// ExposureControlSensingRegionShape (0018,9435) CS 1
#[rustfmt::skip]
pub const EXPOSURE_CONTROL_SENSING_REGION_SHAPE: Tag = Tag(0x0018, 0x9435);
/// ExposureControlSensingRegionLeftVerticalEdge (0018,9436) SS 1
#[rustfmt::skip]
pub const EXPOSURE_CONTROL_SENSING_REGION_LEFT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x9436);
/// ExposureControlSensingRegionRightVerticalEdge (0018,9437) SS 1
#[rustfmt::skip]
pub const EXPOSURE_CONTROL_SENSING_REGION_RIGHT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x9437);
/// ExposureControlSensingRegionUpperHorizontalEdge (0018,9438) SS 1
#[rustfmt::skip]
pub const EXPOSURE_CONTROL_SENSING_REGION_UPPER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x9438);
/// ExposureControlSensingRegionLowerHorizontalEdge (0018,9439) SS 1
#[rustfmt::skip]
pub const EXPOSURE_CONTROL_SENSING_REGION_LOWER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x9439);
/// CenterOfCircularExposureControlSensingRegion (0018,9440) SS 2
#[rustfmt::skip]
pub const CENTER_OF_CIRCULAR_EXPOSURE_CONTROL_SENSING_REGION: Tag = Tag(0x0018, 0x9440);
/// RadiusOfCircularExposureControlSensingRegion (0018,9441) US 1
#[rustfmt::skip]
pub const RADIUS_OF_CIRCULAR_EXPOSURE_CONTROL_SENSING_REGION: Tag = Tag(0x0018, 0x9441);
/// VerticesOfThePolygonalExposureControlSensingRegion (0018,9442) SS 2-n
#[rustfmt::skip]
pub const VERTICES_OF_THE_POLYGONAL_EXPOSURE_CONTROL_SENSING_REGION: Tag = Tag(0x0018, 0x9442);
/// ColumnAngulationPatient (0018,9447) FL 1
#[rustfmt::skip]
pub const COLUMN_ANGULATION_PATIENT: Tag = Tag(0x0018, 0x9447);
/// BeamAngle (0018,9449) FL 1
#[rustfmt::skip]
pub const BEAM_ANGLE: Tag = Tag(0x0018, 0x9449);
/// FrameDetectorParametersSequence (0018,9451) SQ 1
#[rustfmt::skip]
pub const FRAME_DETECTOR_PARAMETERS_SEQUENCE: Tag = Tag(0x0018, 0x9451);
/// CalculatedAnatomyThickness (0018,9452) FL 1
#[rustfmt::skip]
pub const CALCULATED_ANATOMY_THICKNESS: Tag = Tag(0x0018, 0x9452);
/// CalibrationSequence (0018,9455) SQ 1
#[rustfmt::skip]
pub const CALIBRATION_SEQUENCE: Tag = Tag(0x0018, 0x9455);
/// ObjectThicknessSequence (0018,9456) SQ 1
#[rustfmt::skip]
pub const OBJECT_THICKNESS_SEQUENCE: Tag = Tag(0x0018, 0x9456);
/// PlaneIdentification (0018,9457) CS 1
#[rustfmt::skip]
pub const PLANE_IDENTIFICATION: Tag = Tag(0x0018, 0x9457);
/// FieldOfViewDimensionsInFloat (0018,9461) FL 1-2
#[rustfmt::skip]
pub const FIELD_OF_VIEW_DIMENSIONS_IN_FLOAT: Tag = Tag(0x0018, 0x9461);
/// IsocenterReferenceSystemSequence (0018,9462) SQ 1
#[rustfmt::skip]
pub const ISOCENTER_REFERENCE_SYSTEM_SEQUENCE: Tag = Tag(0x0018, 0x9462);
/// PositionerIsocenterPrimaryAngle (0018,9463) FL 1
#[rustfmt::skip]
pub const POSITIONER_ISOCENTER_PRIMARY_ANGLE: Tag = Tag(0x0018, 0x9463);
/// PositionerIsocenterSecondaryAngle (0018,9464) FL 1
#[rustfmt::skip]
pub const POSITIONER_ISOCENTER_SECONDARY_ANGLE: Tag = Tag(0x0018, 0x9464);
/// PositionerIsocenterDetectorRotationAngle (0018,9465) FL 1
#[rustfmt::skip]
pub const POSITIONER_ISOCENTER_DETECTOR_ROTATION_ANGLE: Tag = Tag(0x0018, 0x9465);
/// TableXPositionToIsocenter (0018,9466) FL 1
#[rustfmt::skip]
pub const TABLE_X_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9466);
/// TableYPositionToIsocenter (0018,9467) FL 1
#[rustfmt::skip]
pub const TABLE_Y_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9467);
/// TableZPositionToIsocenter (0018,9468) FL 1
#[rustfmt::skip]
pub const TABLE_Z_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9468);
/// TableHorizontalRotationAngle (0018,9469) FL 1
#[rustfmt::skip]
pub const TABLE_HORIZONTAL_ROTATION_ANGLE: Tag = Tag(0x0018, 0x9469);
/// TableHeadTiltAngle (0018,9470) FL 1
#[rustfmt::skip]
pub const TABLE_HEAD_TILT_ANGLE: Tag = Tag(0x0018, 0x9470);
/// TableCradleTiltAngle (0018,9471) FL 1
#[rustfmt::skip]
pub const TABLE_CRADLE_TILT_ANGLE: Tag = Tag(0x0018, 0x9471);
/// FrameDisplayShutterSequence (0018,9472) SQ 1
#[rustfmt::skip]
pub const FRAME_DISPLAY_SHUTTER_SEQUENCE: Tag = Tag(0x0018, 0x9472);
/// AcquiredImageAreaDoseProduct (0018,9473) FL 1
#[rustfmt::skip]
pub const ACQUIRED_IMAGE_AREA_DOSE_PRODUCT: Tag = Tag(0x0018, 0x9473);
/// CArmPositionerTabletopRelationship (0018,9474) CS 1
#[rustfmt::skip]
pub const C_ARM_POSITIONER_TABLETOP_RELATIONSHIP: Tag = Tag(0x0018, 0x9474);
/// XRayGeometrySequence (0018,9476) SQ 1
#[rustfmt::skip]
pub const X_RAY_GEOMETRY_SEQUENCE: Tag = Tag(0x0018, 0x9476);
/// IrradiationEventIdentificationSequence (0018,9477) SQ 1
#[rustfmt::skip]
pub const IRRADIATION_EVENT_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0018, 0x9477);
/// XRay3DFrameTypeSequence (0018,9504) SQ 1
#[rustfmt::skip]
pub const X_RAY3_D_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9504);
/// ContributingSourcesSequence (0018,9506) SQ 1
#[rustfmt::skip]
pub const CONTRIBUTING_SOURCES_SEQUENCE: Tag = Tag(0x0018, 0x9506);
/// XRay3DAcquisitionSequence (0018,9507) SQ 1
#[rustfmt::skip]
pub const X_RAY3_D_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9507);
/// PrimaryPositionerScanArc (0018,9508) FL 1
#[rustfmt::skip]
pub const PRIMARY_POSITIONER_SCAN_ARC: Tag = Tag(0x0018, 0x9508);
/// SecondaryPositionerScanArc (0018,9509) FL 1
#[rustfmt::skip]
pub const SECONDARY_POSITIONER_SCAN_ARC: Tag = Tag(0x0018, 0x9509);
/// PrimaryPositionerScanStartAngle (0018,9510) FL 1
#[rustfmt::skip]
pub const PRIMARY_POSITIONER_SCAN_START_ANGLE: Tag = Tag(0x0018, 0x9510);
/// SecondaryPositionerScanStartAngle (0018,9511) FL 1
#[rustfmt::skip]
pub const SECONDARY_POSITIONER_SCAN_START_ANGLE: Tag = Tag(0x0018, 0x9511);
/// PrimaryPositionerIncrement (0018,9514) FL 1
#[rustfmt::skip]
pub const PRIMARY_POSITIONER_INCREMENT: Tag = Tag(0x0018, 0x9514);
/// SecondaryPositionerIncrement (0018,9515) FL 1
#[rustfmt::skip]
pub const SECONDARY_POSITIONER_INCREMENT: Tag = Tag(0x0018, 0x9515);
/// StartAcquisitionDateTime (0018,9516) DT 1
#[rustfmt::skip]
pub const START_ACQUISITION_DATE_TIME: Tag = Tag(0x0018, 0x9516);
/// EndAcquisitionDateTime (0018,9517) DT 1
#[rustfmt::skip]
pub const END_ACQUISITION_DATE_TIME: Tag = Tag(0x0018, 0x9517);
/// PrimaryPositionerIncrementSign (0018,9518) SS 1
#[rustfmt::skip]
pub const PRIMARY_POSITIONER_INCREMENT_SIGN: Tag = Tag(0x0018, 0x9518);
/// SecondaryPositionerIncrementSign (0018,9519) SS 1
#[rustfmt::skip]
pub const SECONDARY_POSITIONER_INCREMENT_SIGN: Tag = Tag(0x0018, 0x9519);
/// ApplicationName (0018,9524) LO 1
#[rustfmt::skip]
pub const APPLICATION_NAME: Tag = Tag(0x0018, 0x9524);
/// ApplicationVersion (0018,9525) LO 1
#[rustfmt::skip]
pub const APPLICATION_VERSION: Tag = Tag(0x0018, 0x9525);
/// ApplicationManufacturer (0018,9526) LO 1
#[rustfmt::skip]
pub const APPLICATION_MANUFACTURER: Tag = Tag(0x0018, 0x9526);
/// AlgorithmType (0018,9527) CS 1
#[rustfmt::skip]
pub const ALGORITHM_TYPE: Tag = Tag(0x0018, 0x9527);
/// AlgorithmDescription (0018,9528) LO 1
#[rustfmt::skip]
pub const ALGORITHM_DESCRIPTION: Tag = Tag(0x0018, 0x9528);
/// XRay3DReconstructionSequence (0018,9530) SQ 1
#[rustfmt::skip]
pub const X_RAY3_D_RECONSTRUCTION_SEQUENCE: Tag = Tag(0x0018, 0x9530);
/// ReconstructionDescription (0018,9531) LO 1
#[rustfmt::skip]
pub const RECONSTRUCTION_DESCRIPTION: Tag = Tag(0x0018, 0x9531);
/// PerProjectionAcquisitionSequence (0018,9538) SQ 1
#[rustfmt::skip]
pub const PER_PROJECTION_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9538);
/// DiffusionBMatrixSequence (0018,9601) SQ 1
#[rustfmt::skip]
pub const DIFFUSION_B_MATRIX_SEQUENCE: Tag = Tag(0x0018, 0x9601);
/// DiffusionBValueXX (0018,9602) FD 1
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE_XX: Tag = Tag(0x0018, 0x9602);
/// DiffusionBValueXY (0018,9603) FD 1
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE_XY: Tag = Tag(0x0018, 0x9603);
/// DiffusionBValueXZ (0018,9604) FD 1
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE_XZ: Tag = Tag(0x0018, 0x9604);
/// DiffusionBValueYY (0018,9605) FD 1
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE_YY: Tag = Tag(0x0018, 0x9605);
/// DiffusionBValueYZ (0018,9606) FD 1
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE_YZ: Tag = Tag(0x0018, 0x9606);
/// DiffusionBValueZZ (0018,9607) FD 1
#[rustfmt::skip]
pub const DIFFUSION_B_VALUE_ZZ: Tag = Tag(0x0018, 0x9607);
/// DecayCorrectionDateTime (0018,9701) DT 1
#[rustfmt::skip]
pub const DECAY_CORRECTION_DATE_TIME: Tag = Tag(0x0018, 0x9701);
/// StartDensityThreshold (0018,9715) FD 1
#[rustfmt::skip]
pub const START_DENSITY_THRESHOLD: Tag = Tag(0x0018, 0x9715);
/// StartRelativeDensityDifferenceThreshold (0018,9716) FD 1
#[rustfmt::skip]
pub const START_RELATIVE_DENSITY_DIFFERENCE_THRESHOLD: Tag = Tag(0x0018, 0x9716);
/// StartCardiacTriggerCountThreshold (0018,9717) FD 1
#[rustfmt::skip]
pub const START_CARDIAC_TRIGGER_COUNT_THRESHOLD: Tag = Tag(0x0018, 0x9717);
/// StartRespiratoryTriggerCountThreshold (0018,9718) FD 1
#[rustfmt::skip]
pub const START_RESPIRATORY_TRIGGER_COUNT_THRESHOLD: Tag = Tag(0x0018, 0x9718);
/// TerminationCountsThreshold (0018,9719) FD 1
#[rustfmt::skip]
pub const TERMINATION_COUNTS_THRESHOLD: Tag = Tag(0x0018, 0x9719);
/// TerminationDensityThreshold (0018,9720) FD 1
#[rustfmt::skip]
pub const TERMINATION_DENSITY_THRESHOLD: Tag = Tag(0x0018, 0x9720);
/// TerminationRelativeDensityThreshold (0018,9721) FD 1
#[rustfmt::skip]
pub const TERMINATION_RELATIVE_DENSITY_THRESHOLD: Tag = Tag(0x0018, 0x9721);
/// TerminationTimeThreshold (0018,9722) FD 1
#[rustfmt::skip]
pub const TERMINATION_TIME_THRESHOLD: Tag = Tag(0x0018, 0x9722);
/// TerminationCardiacTriggerCountThreshold (0018,9723) FD 1
#[rustfmt::skip]
pub const TERMINATION_CARDIAC_TRIGGER_COUNT_THRESHOLD: Tag = Tag(0x0018, 0x9723);
/// TerminationRespiratoryTriggerCountThreshold (0018,9724) FD 1
#[rustfmt::skip]
pub const TERMINATION_RESPIRATORY_TRIGGER_COUNT_THRESHOLD: Tag = Tag(0x0018, 0x9724);
/// DetectorGeometry (0018,9725) CS 1
#[rustfmt::skip]
pub const DETECTOR_GEOMETRY: Tag = Tag(0x0018, 0x9725);
/// TransverseDetectorSeparation (0018,9726) FD 1
#[rustfmt::skip]
pub const TRANSVERSE_DETECTOR_SEPARATION: Tag = Tag(0x0018, 0x9726);
/// AxialDetectorDimension (0018,9727) FD 1
#[rustfmt::skip]
pub const AXIAL_DETECTOR_DIMENSION: Tag = Tag(0x0018, 0x9727);
/// RadiopharmaceuticalAgentNumber (0018,9729) US 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_AGENT_NUMBER: Tag = Tag(0x0018, 0x9729);
/// PETFrameAcquisitionSequence (0018,9732) SQ 1
#[rustfmt::skip]
pub const PET_FRAME_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9732);
/// PETDetectorMotionDetailsSequence (0018,9733) SQ 1
#[rustfmt::skip]
pub const PET_DETECTOR_MOTION_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x9733);
/// PETTableDynamicsSequence (0018,9734) SQ 1
#[rustfmt::skip]
pub const PET_TABLE_DYNAMICS_SEQUENCE: Tag = Tag(0x0018, 0x9734);
/// PETPositionSequence (0018,9735) SQ 1
#[rustfmt::skip]
pub const PET_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9735);
/// PETFrameCorrectionFactorsSequence (0018,9736) SQ 1
#[rustfmt::skip]
pub const PET_FRAME_CORRECTION_FACTORS_SEQUENCE: Tag = Tag(0x0018, 0x9736);
/// RadiopharmaceuticalUsageSequence (0018,9737) SQ 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_USAGE_SEQUENCE: Tag = Tag(0x0018, 0x9737);
/// AttenuationCorrectionSource (0018,9738) CS 1
#[rustfmt::skip]
pub const ATTENUATION_CORRECTION_SOURCE: Tag = Tag(0x0018, 0x9738);
/// NumberOfIterations (0018,9739) US 1
#[rustfmt::skip]
pub const NUMBER_OF_ITERATIONS: Tag = Tag(0x0018, 0x9739);
/// NumberOfSubsets (0018,9740) US 1
#[rustfmt::skip]
pub const NUMBER_OF_SUBSETS: Tag = Tag(0x0018, 0x9740);
/// PETReconstructionSequence (0018,9749) SQ 1
#[rustfmt::skip]
pub const PET_RECONSTRUCTION_SEQUENCE: Tag = Tag(0x0018, 0x9749);
/// PETFrameTypeSequence (0018,9751) SQ 1
#[rustfmt::skip]
pub const PET_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9751);
/// TimeOfFlightInformationUsed (0018,9755) CS 1
#[rustfmt::skip]
pub const TIME_OF_FLIGHT_INFORMATION_USED: Tag = Tag(0x0018, 0x9755);
/// ReconstructionType (0018,9756) CS 1
#[rustfmt::skip]
pub const RECONSTRUCTION_TYPE: Tag = Tag(0x0018, 0x9756);
/// DecayCorrected (0018,9758) CS 1
#[rustfmt::skip]
pub const DECAY_CORRECTED: Tag = Tag(0x0018, 0x9758);
/// AttenuationCorrected (0018,9759) CS 1
#[rustfmt::skip]
pub const ATTENUATION_CORRECTED: Tag = Tag(0x0018, 0x9759);
/// ScatterCorrected (0018,9760) CS 1
#[rustfmt::skip]
pub const SCATTER_CORRECTED: Tag = Tag(0x0018, 0x9760);
/// DeadTimeCorrected (0018,9761) CS 1
#[rustfmt::skip]
pub const DEAD_TIME_CORRECTED: Tag = Tag(0x0018, 0x9761);
/// GantryMotionCorrected (0018,9762) CS 1
#[rustfmt::skip]
pub const GANTRY_MOTION_CORRECTED: Tag = Tag(0x0018, 0x9762);
/// PatientMotionCorrected (0018,9763) CS 1
#[rustfmt::skip]
pub const PATIENT_MOTION_CORRECTED: Tag = Tag(0x0018, 0x9763);
/// CountLossNormalizationCorrected (0018,9764) CS 1
#[rustfmt::skip]
pub const COUNT_LOSS_NORMALIZATION_CORRECTED: Tag = Tag(0x0018, 0x9764);
/// RandomsCorrected (0018,9765) CS 1
#[rustfmt::skip]
pub const RANDOMS_CORRECTED: Tag = Tag(0x0018, 0x9765);
/// NonUniformRadialSamplingCorrected (0018,9766) CS 1
#[rustfmt::skip]
pub const NON_UNIFORM_RADIAL_SAMPLING_CORRECTED: Tag = Tag(0x0018, 0x9766);
/// SensitivityCalibrated (0018,9767) CS 1
#[rustfmt::skip]
pub const SENSITIVITY_CALIBRATED: Tag = Tag(0x0018, 0x9767);
/// DetectorNormalizationCorrection (0018,9768) CS 1
#[rustfmt::skip]
pub const DETECTOR_NORMALIZATION_CORRECTION: Tag = Tag(0x0018, 0x9768);
/// IterativeReconstructionMethod (0018,9769) CS 1
#[rustfmt::skip]
pub const ITERATIVE_RECONSTRUCTION_METHOD: Tag = Tag(0x0018, 0x9769);
/// AttenuationCorrectionTemporalRelationship (0018,9770) CS 1
#[rustfmt::skip]
pub const ATTENUATION_CORRECTION_TEMPORAL_RELATIONSHIP: Tag = Tag(0x0018, 0x9770);
/// PatientPhysiologicalStateSequence (0018,9771) SQ 1
#[rustfmt::skip]
pub const PATIENT_PHYSIOLOGICAL_STATE_SEQUENCE: Tag = Tag(0x0018, 0x9771);
/// PatientPhysiologicalStateCodeSequence (0018,9772) SQ 1
#[rustfmt::skip]
pub const PATIENT_PHYSIOLOGICAL_STATE_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9772);
/// DepthsOfFocus (0018,9801) FD 1-n
#[rustfmt::skip]
pub const DEPTHS_OF_FOCUS: Tag = Tag(0x0018, 0x9801);
/// ExcludedIntervalsSequence (0018,9803) SQ 1
#[rustfmt::skip]
pub const EXCLUDED_INTERVALS_SEQUENCE: Tag = Tag(0x0018, 0x9803);
/// ExclusionStartDateTime (0018,9804) DT 1
#[rustfmt::skip]
pub const EXCLUSION_START_DATE_TIME: Tag = Tag(0x0018, 0x9804);
/// ExclusionDuration (0018,9805) FD 1
#[rustfmt::skip]
pub const EXCLUSION_DURATION: Tag = Tag(0x0018, 0x9805);
/// USImageDescriptionSequence (0018,9806) SQ 1
#[rustfmt::skip]
pub const US_IMAGE_DESCRIPTION_SEQUENCE: Tag = Tag(0x0018, 0x9806);
/// ImageDataTypeSequence (0018,9807) SQ 1
#[rustfmt::skip]
pub const IMAGE_DATA_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9807);
/// DataType (0018,9808) CS 1
#[rustfmt::skip]
pub const DATA_TYPE: Tag = Tag(0x0018, 0x9808);
/// TransducerScanPatternCodeSequence (0018,9809) SQ 1
#[rustfmt::skip]
pub const TRANSDUCER_SCAN_PATTERN_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9809);
/// AliasedDataType (0018,980B) CS 1
#[rustfmt::skip]
pub const ALIASED_DATA_TYPE: Tag = Tag(0x0018, 0x980B);
/// PositionMeasuringDeviceUsed (0018,980C) CS 1
#[rustfmt::skip]
pub const POSITION_MEASURING_DEVICE_USED: Tag = Tag(0x0018, 0x980C);
/// TransducerGeometryCodeSequence (0018,980D) SQ 1
#[rustfmt::skip]
pub const TRANSDUCER_GEOMETRY_CODE_SEQUENCE: Tag = Tag(0x0018, 0x980D);
/// TransducerBeamSteeringCodeSequence (0018,980E) SQ 1
#[rustfmt::skip]
pub const TRANSDUCER_BEAM_STEERING_CODE_SEQUENCE: Tag = Tag(0x0018, 0x980E);
/// TransducerApplicationCodeSequence (0018,980F) SQ 1
#[rustfmt::skip]
pub const TRANSDUCER_APPLICATION_CODE_SEQUENCE: Tag = Tag(0x0018, 0x980F);
/// ContributingEquipmentSequence (0018,A001) SQ 1
#[rustfmt::skip]
pub const CONTRIBUTING_EQUIPMENT_SEQUENCE: Tag = Tag(0x0018, 0xA001);
/// ContributionDateTime (0018,A002) DT 1
#[rustfmt::skip]
pub const CONTRIBUTION_DATE_TIME: Tag = Tag(0x0018, 0xA002);
/// ContributionDescription (0018,A003) ST 1
#[rustfmt::skip]
pub const CONTRIBUTION_DESCRIPTION: Tag = Tag(0x0018, 0xA003);
/// StudyInstanceUID (0020,000D) UI 1
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI 1
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH 1
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS 1
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// AcquisitionNumber (0020,0012) IS 1
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// InstanceNumber (0020,0013) IS 1
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// IsotopeNumber (0020,0014) IS 1
#[rustfmt::skip]
pub const ISOTOPE_NUMBER: Tag = Tag(0x0020, 0x0014);
/// PhaseNumber (0020,0015) IS 1
#[rustfmt::skip]
pub const PHASE_NUMBER: Tag = Tag(0x0020, 0x0015);
/// IntervalNumber (0020,0016) IS 1
#[rustfmt::skip]
pub const INTERVAL_NUMBER: Tag = Tag(0x0020, 0x0016);
/// TimeSlotNumber (0020,0017) IS 1
#[rustfmt::skip]
pub const TIME_SLOT_NUMBER: Tag = Tag(0x0020, 0x0017);
/// AngleNumber (0020,0018) IS 1
#[rustfmt::skip]
pub const ANGLE_NUMBER: Tag = Tag(0x0020, 0x0018);
/// ItemNumber (0020,0019) IS 1
#[rustfmt::skip]
pub const ITEM_NUMBER: Tag = Tag(0x0020, 0x0019);
/// PatientOrientation (0020,0020) CS 2
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// OverlayNumber (0020,0022) IS 1
#[rustfmt::skip]
pub const OVERLAY_NUMBER: Tag = Tag(0x0020, 0x0022);
/// CurveNumber (0020,0024) IS 1
#[rustfmt::skip]
pub const CURVE_NUMBER: Tag = Tag(0x0020, 0x0024);
/// LUTNumber (0020,0026) IS 1
#[rustfmt::skip]
pub const LUT_NUMBER: Tag = Tag(0x0020, 0x0026);
/// PyramidLabel (0020,0027) LO 1
#[rustfmt::skip]
pub const PYRAMID_LABEL: Tag = Tag(0x0020, 0x0027);
/// ImagePosition (0020,0030) DS 3
#[rustfmt::skip]
pub const IMAGE_POSITION: Tag = Tag(0x0020, 0x0030);
/// ImagePositionPatient (0020,0032) DS 3
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientation (0020,0035) DS 6
#[rustfmt::skip]
pub const IMAGE_ORIENTATION: Tag = Tag(0x0020, 0x0035);
/// ImageOrientationPatient (0020,0037) DS 6
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// Location (0020,0050) DS 1
#[rustfmt::skip]
pub const LOCATION: Tag = Tag(0x0020, 0x0050);
/// FrameOfReferenceUID (0020,0052) UI 1
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Laterality (0020,0060) CS 1
#[rustfmt::skip]
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
/// ImageLaterality (0020,0062) CS 1
#[rustfmt::skip]
pub const IMAGE_LATERALITY: Tag = Tag(0x0020, 0x0062);
/// ImageGeometryType (0020,0070) LO 1
#[rustfmt::skip]
pub const IMAGE_GEOMETRY_TYPE: Tag = Tag(0x0020, 0x0070);
/// MaskingImage (0020,0080) CS 1-n
#[rustfmt::skip]
pub const MASKING_IMAGE: Tag = Tag(0x0020, 0x0080);
/// ReportNumber (0020,00AA) IS 1
#[rustfmt::skip]
pub const REPORT_NUMBER: Tag = Tag(0x0020, 0x00AA);
/// TemporalPositionIdentifier (0020,0100) IS 1
#[rustfmt::skip]
pub const TEMPORAL_POSITION_IDENTIFIER: Tag = Tag(0x0020, 0x0100);
/// NumberOfTemporalPositions (0020,0105) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_TEMPORAL_POSITIONS: Tag = Tag(0x0020, 0x0105);
/// TemporalResolution (0020,0110) DS 1
#[rustfmt::skip]
pub const TEMPORAL_RESOLUTION: Tag = Tag(0x0020, 0x0110);
/// SynchronizationFrameOfReferenceUID (0020,0200) UI 1
#[rustfmt::skip]
pub const SYNCHRONIZATION_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0200);
/// SOPInstanceUIDOfConcatenationSource (0020,0242) UI 1
#[rustfmt::skip]
pub const SOP_INSTANCE_UID_OF_CONCATENATION_SOURCE: Tag = Tag(0x0020, 0x0242);
/// SeriesInStudy (0020,1000) IS 1
#[rustfmt::skip]
pub const SERIES_IN_STUDY: Tag = Tag(0x0020, 0x1000);
/// AcquisitionsInSeries (0020,1001) IS 1
#[rustfmt::skip]
pub const ACQUISITIONS_IN_SERIES: Tag = Tag(0x0020, 0x1001);
/// ImagesInAcquisition (0020,1002) IS 1
#[rustfmt::skip]
pub const IMAGES_IN_ACQUISITION: Tag = Tag(0x0020, 0x1002);
/// ImagesInSeries (0020,1003) IS 1
#[rustfmt::skip]
pub const IMAGES_IN_SERIES: Tag = Tag(0x0020, 0x1003);
/// AcquisitionsInStudy (0020,1004) IS 1
#[rustfmt::skip]
pub const ACQUISITIONS_IN_STUDY: Tag = Tag(0x0020, 0x1004);
/// ImagesInStudy (0020,1005) IS 1
#[rustfmt::skip]
pub const IMAGES_IN_STUDY: Tag = Tag(0x0020, 0x1005);
/// Reference (0020,1020) LO 1-n
#[rustfmt::skip]
pub const REFERENCE: Tag = Tag(0x0020, 0x1020);
/// TargetPositionReferenceIndicator (0020,103F) LO 1
#[rustfmt::skip]
pub const TARGET_POSITION_REFERENCE_INDICATOR: Tag = Tag(0x0020, 0x103F);
/// PositionReferenceIndicator (0020,1040) LO 1
#[rustfmt::skip]
pub const POSITION_REFERENCE_INDICATOR: Tag = Tag(0x0020, 0x1040);
/// SliceLocation (0020,1041) DS 1
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// OtherStudyNumbers (0020,1070) IS 1-n
#[rustfmt::skip]
pub const OTHER_STUDY_NUMBERS: Tag = Tag(0x0020, 0x1070);
/// NumberOfPatientRelatedStudies (0020,1200) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_PATIENT_RELATED_STUDIES: Tag = Tag(0x0020, 0x1200);
/// NumberOfPatientRelatedSeries (0020,1202) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_PATIENT_RELATED_SERIES: Tag = Tag(0x0020, 0x1202);
/// NumberOfPatientRelatedInstances (0020,1204) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_PATIENT_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1204);
/// NumberOfStudyRelatedSeries (0020,1206) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_STUDY_RELATED_SERIES: Tag = Tag(0x0020, 0x1206);
/// NumberOfStudyRelatedInstances (0020,1208) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_STUDY_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1208);
/// NumberOfSeriesRelatedInstances (0020,1209) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_SERIES_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1209);
/// SourceImageIDs (0020,31xx) CS 1-n
#[rustfmt::skip]
pub const SOURCE_IMAGE_IDS: Tag = Tag(0x0020, 0x3100);
/// ModifyingDeviceID (0020,3401) CS 1
#[rustfmt::skip]
pub const MODIFYING_DEVICE_ID: Tag = Tag(0x0020, 0x3401);
/// ModifiedImageID (0020,3402) CS 1
#[rustfmt::skip]
pub const MODIFIED_IMAGE_ID: Tag = Tag(0x0020, 0x3402);
/// ModifiedImageDate (0020,3403) DA 1
#[rustfmt::skip]
pub const MODIFIED_IMAGE_DATE: Tag = Tag(0x0020, 0x3403);
/// ModifyingDeviceManufacturer (0020,3404) LO 1
#[rustfmt::skip]
pub const MODIFYING_DEVICE_MANUFACTURER: Tag = Tag(0x0020, 0x3404);
/// ModifiedImageTime (0020,3405) TM 1
#[rustfmt::skip]
pub const MODIFIED_IMAGE_TIME: Tag = Tag(0x0020, 0x3405);
/// ModifiedImageDescription (0020,3406) LO 1
#[rustfmt::skip]
pub const MODIFIED_IMAGE_DESCRIPTION: Tag = Tag(0x0020, 0x3406);
/// ImageComments (0020,4000) LT 1
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// OriginalImageIdentification (0020,5000) AT 1-n
#[rustfmt::skip]
pub const ORIGINAL_IMAGE_IDENTIFICATION: Tag = Tag(0x0020, 0x5000);
/// OriginalImageIdentificationNomenclature (0020,5002) LO 1-n
#[rustfmt::skip]
pub const ORIGINAL_IMAGE_IDENTIFICATION_NOMENCLATURE: Tag = Tag(0x0020, 0x5002);
/// StackID (0020,9056) SH 1
#[rustfmt::skip]
pub const STACK_ID: Tag = Tag(0x0020, 0x9056);
/// InStackPositionNumber (0020,9057) UL 1
#[rustfmt::skip]
pub const IN_STACK_POSITION_NUMBER: Tag = Tag(0x0020, 0x9057);
/// FrameAnatomySequence (0020,9071) SQ 1
#[rustfmt::skip]
pub const FRAME_ANATOMY_SEQUENCE: Tag = Tag(0x0020, 0x9071);
/// FrameLaterality (0020,9072) CS 1
#[rustfmt::skip]
pub const FRAME_LATERALITY: Tag = Tag(0x0020, 0x9072);
/// FrameContentSequence (0020,9111) SQ 1
#[rustfmt::skip]
pub const FRAME_CONTENT_SEQUENCE: Tag = Tag(0x0020, 0x9111);
/// PlanePositionSequence (0020,9113) SQ 1
#[rustfmt::skip]
pub const PLANE_POSITION_SEQUENCE: Tag = Tag(0x0020, 0x9113);
/// PlaneOrientationSequence (0020,9116) SQ 1
#[rustfmt::skip]
pub const PLANE_ORIENTATION_SEQUENCE: Tag = Tag(0x0020, 0x9116);
/// TemporalPositionIndex (0020,9128) UL 1
#[rustfmt::skip]
pub const TEMPORAL_POSITION_INDEX: Tag = Tag(0x0020, 0x9128);
/// NominalCardiacTriggerDelayTime (0020,9153) FD 1
#[rustfmt::skip]
pub const NOMINAL_CARDIAC_TRIGGER_DELAY_TIME: Tag = Tag(0x0020, 0x9153);
/// NominalCardiacTriggerTimePriorToRPeak (0020,9154) FL 1
#[rustfmt::skip]
pub const NOMINAL_CARDIAC_TRIGGER_TIME_PRIOR_TO_R_PEAK: Tag = Tag(0x0020, 0x9154);
/// ActualCardiacTriggerTimePriorToRPeak (0020,9155) FL 1
#[rustfmt::skip]
pub const ACTUAL_CARDIAC_TRIGGER_TIME_PRIOR_TO_R_PEAK: Tag = Tag(0x0020, 0x9155);
/// FrameAcquisitionNumber (0020,9156) US 1
#[rustfmt::skip]
pub const FRAME_ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x9156);
/// DimensionIndexValues (0020,9157) UL 1-n
#[rustfmt::skip]
pub const DIMENSION_INDEX_VALUES: Tag = Tag(0x0020, 0x9157);
/// FrameComments (0020,9158) LT 1
#[rustfmt::skip]
pub const FRAME_COMMENTS: Tag = Tag(0x0020, 0x9158);
/// ConcatenationUID (0020,9161) UI 1
#[rustfmt::skip]
pub const CONCATENATION_UID: Tag = Tag(0x0020, 0x9161);
/// InConcatenationNumber (0020,9162) US 1
#[rustfmt::skip]
pub const IN_CONCATENATION_NUMBER: Tag = Tag(0x0020, 0x9162);
/// InConcatenationTotalNumber (0020,9163) US 1
#[rustfmt::skip]
pub const IN_CONCATENATION_TOTAL_NUMBER: Tag = Tag(0x0020, 0x9163);
/// DimensionOrganizationUID (0020,9164) UI 1
#[rustfmt::skip]
pub const DIMENSION_ORGANIZATION_UID: Tag = Tag(0x0020, 0x9164);
/// DimensionIndexPointer (0020,9165) AT 1
#[rustfmt::skip]
pub const DIMENSION_INDEX_POINTER: Tag = Tag(0x0020, 0x9165);
/// FunctionalGroupPointer (0020,9167) AT 1
#[rustfmt::skip]
pub const FUNCTIONAL_GROUP_POINTER: Tag = Tag(0x0020, 0x9167);
/// UnassignedSharedConvertedAttributesSequence (0020,9170) SQ 1
#[rustfmt::skip]
pub const UNASSIGNED_SHARED_CONVERTED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0020, 0x9170);
/// UnassignedPerFrameConvertedAttributesSequence (0020,9171) SQ 1
#[rustfmt::skip]
pub const UNASSIGNED_PER_FRAME_CONVERTED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0020, 0x9171);
/// ConversionSourceAttributesSequence (0020,9172) SQ 1
#[rustfmt::skip]
pub const CONVERSION_SOURCE_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0020, 0x9172);
/// DimensionIndexPrivateCreator (0020,9213) LO 1
#[rustfmt::skip]
pub const DIMENSION_INDEX_PRIVATE_CREATOR: Tag = Tag(0x0020, 0x9213);
/// DimensionOrganizationSequence (0020,9221) SQ 1
#[rustfmt::skip]
pub const DIMENSION_ORGANIZATION_SEQUENCE: Tag = Tag(0x0020, 0x9221);
/// DimensionIndexSequence (0020,9222) SQ 1
#[rustfmt::skip]
pub const DIMENSION_INDEX_SEQUENCE: Tag = Tag(0x0020, 0x9222);
/// ConcatenationFrameOffsetNumber (0020,9228) UL 1
#[rustfmt::skip]
pub const CONCATENATION_FRAME_OFFSET_NUMBER: Tag = Tag(0x0020, 0x9228);
/// FunctionalGroupPrivateCreator (0020,9238) LO 1
#[rustfmt::skip]
pub const FUNCTIONAL_GROUP_PRIVATE_CREATOR: Tag = Tag(0x0020, 0x9238);
/// NominalPercentageOfCardiacPhase (0020,9241) FL 1
#[rustfmt::skip]
pub const NOMINAL_PERCENTAGE_OF_CARDIAC_PHASE: Tag = Tag(0x0020, 0x9241);
/// NominalPercentageOfRespiratoryPhase (0020,9245) FL 1
#[rustfmt::skip]
pub const NOMINAL_PERCENTAGE_OF_RESPIRATORY_PHASE: Tag = Tag(0x0020, 0x9245);
/// StartingRespiratoryAmplitude (0020,9246) FL 1
#[rustfmt::skip]
pub const STARTING_RESPIRATORY_AMPLITUDE: Tag = Tag(0x0020, 0x9246);
/// StartingRespiratoryPhase (0020,9247) CS 1
#[rustfmt::skip]
pub const STARTING_RESPIRATORY_PHASE: Tag = Tag(0x0020, 0x9247);
/// EndingRespiratoryAmplitude (0020,9248) FL 1
#[rustfmt::skip]
pub const ENDING_RESPIRATORY_AMPLITUDE: Tag = Tag(0x0020, 0x9248);
/// EndingRespiratoryPhase (0020,9249) CS 1
#[rustfmt::skip]
pub const ENDING_RESPIRATORY_PHASE: Tag = Tag(0x0020, 0x9249);
/// RespiratoryTriggerType (0020,9250) CS 1
#[rustfmt::skip]
pub const RESPIRATORY_TRIGGER_TYPE: Tag = Tag(0x0020, 0x9250);
/// RRIntervalTimeNominal (0020,9251) FD 1
#[rustfmt::skip]
pub const RR_INTERVAL_TIME_NOMINAL: Tag = Tag(0x0020, 0x9251);
/// ActualCardiacTriggerDelayTime (0020,9252) FD 1
#[rustfmt::skip]
pub const ACTUAL_CARDIAC_TRIGGER_DELAY_TIME: Tag = Tag(0x0020, 0x9252);
/// RespiratorySynchronizationSequence (0020,9253) SQ 1
#[rustfmt::skip]
pub const RESPIRATORY_SYNCHRONIZATION_SEQUENCE: Tag = Tag(0x0020, 0x9253);
/// RespiratoryIntervalTime (0020,9254) FD 1
#[rustfmt::skip]
pub const RESPIRATORY_INTERVAL_TIME: Tag = Tag(0x0020, 0x9254);
/// NominalRespiratoryTriggerDelayTime (0020,9255) FD 1
#[rustfmt::skip]
pub const NOMINAL_RESPIRATORY_TRIGGER_DELAY_TIME: Tag = Tag(0x0020, 0x9255);
/// RespiratoryTriggerDelayThreshold (0020,9256) FD 1
#[rustfmt::skip]
pub const RESPIRATORY_TRIGGER_DELAY_THRESHOLD: Tag = Tag(0x0020, 0x9256);
/// ActualRespiratoryTriggerDelayTime (0020,9257) FD 1
#[rustfmt::skip]
pub const ACTUAL_RESPIRATORY_TRIGGER_DELAY_TIME: Tag = Tag(0x0020, 0x9257);
/// ImagePositionVolume (0020,9301) FD 3
#[rustfmt::skip]
pub const IMAGE_POSITION_VOLUME: Tag = Tag(0x0020, 0x9301);
/// ImageOrientationVolume (0020,9302) FD 6
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_VOLUME: Tag = Tag(0x0020, 0x9302);
/// UltrasoundAcquisitionGeometry (0020,9307) CS 1
#[rustfmt::skip]
pub const ULTRASOUND_ACQUISITION_GEOMETRY: Tag = Tag(0x0020, 0x9307);
/// ApexPosition (0020,9308) FD 3
#[rustfmt::skip]
pub const APEX_POSITION: Tag = Tag(0x0020, 0x9308);
/// VolumeToTransducerMappingMatrix (0020,9309) FD 16
#[rustfmt::skip]
pub const VOLUME_TO_TRANSDUCER_MAPPING_MATRIX: Tag = Tag(0x0020, 0x9309);
/// VolumeToTableMappingMatrix (0020,930A) FD 16
#[rustfmt::skip]
pub const VOLUME_TO_TABLE_MAPPING_MATRIX: Tag = Tag(0x0020, 0x930A);
/// VolumeToTransducerRelationship (0020,930B) CS 1
#[rustfmt::skip]
pub const VOLUME_TO_TRANSDUCER_RELATIONSHIP: Tag = Tag(0x0020, 0x930B);
/// PatientFrameOfReferenceSource (0020,930C) CS 1
#[rustfmt::skip]
pub const PATIENT_FRAME_OF_REFERENCE_SOURCE: Tag = Tag(0x0020, 0x930C);
/// TemporalPositionTimeOffset (0020,930D) FD 1
#[rustfmt::skip]
pub const TEMPORAL_POSITION_TIME_OFFSET: Tag = Tag(0x0020, 0x930D);
/// PlanePositionVolumeSequence (0020,930E) SQ 1
#[rustfmt::skip]
pub const PLANE_POSITION_VOLUME_SEQUENCE: Tag = Tag(0x0020, 0x930E);
/// PlaneOrientationVolumeSequence (0020,930F) SQ 1
#[rustfmt::skip]
pub const PLANE_ORIENTATION_VOLUME_SEQUENCE: Tag = Tag(0x0020, 0x930F);
/// TemporalPositionSequence (0020,9310) SQ 1
#[rustfmt::skip]
pub const TEMPORAL_POSITION_SEQUENCE: Tag = Tag(0x0020, 0x9310);
/// DimensionOrganizationType (0020,9311) CS 1
#[rustfmt::skip]
pub const DIMENSION_ORGANIZATION_TYPE: Tag = Tag(0x0020, 0x9311);
/// VolumeFrameOfReferenceUID (0020,9312) UI 1
#[rustfmt::skip]
pub const VOLUME_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x9312);
/// TableFrameOfReferenceUID (0020,9313) UI 1
#[rustfmt::skip]
pub const TABLE_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x9313);
/// DimensionDescriptionLabel (0020,9421) LO 1
#[rustfmt::skip]
pub const DIMENSION_DESCRIPTION_LABEL: Tag = Tag(0x0020, 0x9421);
/// PatientOrientationInFrameSequence (0020,9450) SQ 1
#[rustfmt::skip]
pub const PATIENT_ORIENTATION_IN_FRAME_SEQUENCE: Tag = Tag(0x0020, 0x9450);
/// FrameLabel (0020,9453) LO 1
#[rustfmt::skip]
pub const FRAME_LABEL: Tag = Tag(0x0020, 0x9453);
/// AcquisitionIndex (0020,9518) US 1-n
#[rustfmt::skip]
pub const ACQUISITION_INDEX: Tag = Tag(0x0020, 0x9518);
/// ContributingSOPInstancesReferenceSequence (0020,9529) SQ 1
#[rustfmt::skip]
pub const CONTRIBUTING_SOP_INSTANCES_REFERENCE_SEQUENCE: Tag = Tag(0x0020, 0x9529);
/// ReconstructionIndex (0020,9536) US 1
#[rustfmt::skip]
pub const RECONSTRUCTION_INDEX: Tag = Tag(0x0020, 0x9536);
/// SamplesPerPixel (0028,0002) US 1
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// SamplesPerPixelUsed (0028,0003) US 1
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL_USED: Tag = Tag(0x0028, 0x0003);
/// PhotometricInterpretation (0028,0004) CS 1
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// ImageDimensions (0028,0005) US 1
#[rustfmt::skip]
pub const IMAGE_DIMENSIONS: Tag = Tag(0x0028, 0x0005);
/// PlanarConfiguration (0028,0006) US 1
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames (0028,0008) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// FrameIncrementPointer (0028,0009) AT 1-n
#[rustfmt::skip]
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);
/// FrameDimensionPointer (0028,000A) AT 1-n
#[rustfmt::skip]
pub const FRAME_DIMENSION_POINTER: Tag = Tag(0x0028, 0x000A);
/// Rows (0028,0010) US 1
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US 1
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// Planes (0028,0012) US 1
#[rustfmt::skip]
pub const PLANES: Tag = Tag(0x0028, 0x0012);
/// UltrasoundColorDataPresent (0028,0014) US 1
#[rustfmt::skip]
pub const ULTRASOUND_COLOR_DATA_PRESENT: Tag = Tag(0x0028, 0x0014);
/// PixelSpacing (0028,0030) DS 2
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// ZoomFactor (0028,0031) DS 2
#[rustfmt::skip]
pub const ZOOM_FACTOR: Tag = Tag(0x0028, 0x0031);
/// ZoomCenter (0028,0032) DS 2
#[rustfmt::skip]
pub const ZOOM_CENTER: Tag = Tag(0x0028, 0x0032);
/// PixelAspectRatio (0028,0034) IS 2
#[rustfmt::skip]
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// ImageFormat (0028,0040) CS 1
#[rustfmt::skip]
pub const IMAGE_FORMAT: Tag = Tag(0x0028, 0x0040);
/// ManipulatedImage (0028,0050) LO 1-n
#[rustfmt::skip]
pub const MANIPULATED_IMAGE: Tag = Tag(0x0028, 0x0050);
/// CorrectedImage (0028,0051) CS 1-n
#[rustfmt::skip]
pub const CORRECTED_IMAGE: Tag = Tag(0x0028, 0x0051);
/// CompressionRecognitionCode (0028,005F) LO 1
#[rustfmt::skip]
pub const COMPRESSION_RECOGNITION_CODE: Tag = Tag(0x0028, 0x005F);
/// CompressionCode (0028,0060) CS 1
#[rustfmt::skip]
pub const COMPRESSION_CODE: Tag = Tag(0x0028, 0x0060);
/// CompressionOriginator (0028,0061) SH 1
#[rustfmt::skip]
pub const COMPRESSION_ORIGINATOR: Tag = Tag(0x0028, 0x0061);
/// CompressionLabel (0028,0062) LO 1
#[rustfmt::skip]
pub const COMPRESSION_LABEL: Tag = Tag(0x0028, 0x0062);
/// CompressionDescription (0028,0063) SH 1
#[rustfmt::skip]
pub const COMPRESSION_DESCRIPTION: Tag = Tag(0x0028, 0x0063);
/// CompressionSequence (0028,0065) CS 1-n
#[rustfmt::skip]
pub const COMPRESSION_SEQUENCE: Tag = Tag(0x0028, 0x0065);
/// CompressionStepPointers (0028,0066) AT 1-n
#[rustfmt::skip]
pub const COMPRESSION_STEP_POINTERS: Tag = Tag(0x0028, 0x0066);
/// RepeatInterval (0028,0068) US 1
#[rustfmt::skip]
pub const REPEAT_INTERVAL: Tag = Tag(0x0028, 0x0068);
/// BitsGrouped (0028,0069) US 1
#[rustfmt::skip]
pub const BITS_GROUPED: Tag = Tag(0x0028, 0x0069);
/// PerimeterTable (0028,0070) US 1-n
#[rustfmt::skip]
pub const PERIMETER_TABLE: Tag = Tag(0x0028, 0x0070);
/// PerimeterValue (0028,0071) US or SS 1
#[rustfmt::skip]
pub const PERIMETER_VALUE: Tag = Tag(0x0028, 0x0071);
/// PredictorRows (0028,0080) US 1
#[rustfmt::skip]
pub const PREDICTOR_ROWS: Tag = Tag(0x0028, 0x0080);
/// PredictorColumns (0028,0081) US 1
#[rustfmt::skip]
pub const PREDICTOR_COLUMNS: Tag = Tag(0x0028, 0x0081);
/// PredictorConstants (0028,0082) US 1-n
#[rustfmt::skip]
pub const PREDICTOR_CONSTANTS: Tag = Tag(0x0028, 0x0082);
/// BlockedPixels (0028,0090) CS 1
#[rustfmt::skip]
pub const BLOCKED_PIXELS: Tag = Tag(0x0028, 0x0090);
/// BlockRows (0028,0091) US 1
#[rustfmt::skip]
pub const BLOCK_ROWS: Tag = Tag(0x0028, 0x0091);
/// BlockColumns (0028,0092) US 1
#[rustfmt::skip]
pub const BLOCK_COLUMNS: Tag = Tag(0x0028, 0x0092);
/// RowOverlap (0028,0093) US 1
#[rustfmt::skip]
pub const ROW_OVERLAP: Tag = Tag(0x0028, 0x0093);
/// ColumnOverlap (0028,0094) US 1
#[rustfmt::skip]
pub const COLUMN_OVERLAP: Tag = Tag(0x0028, 0x0094);
/// BitsAllocated (0028,0100) US 1
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US 1
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US 1
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US 1
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestValidPixelValue (0028,0104) US or SS 1
#[rustfmt::skip]
pub const SMALLEST_VALID_PIXEL_VALUE: Tag = Tag(0x0028, 0x0104);
/// LargestValidPixelValue (0028,0105) US or SS 1
#[rustfmt::skip]
pub const LARGEST_VALID_PIXEL_VALUE: Tag = Tag(0x0028, 0x0105);
/// SmallestImagePixelValue (0028,0106) US or SS 1
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue (0028,0107) US or SS 1
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// SmallestPixelValueInSeries (0028,0108) US or SS 1
#[rustfmt::skip]
pub const SMALLEST_PIXEL_VALUE_IN_SERIES: Tag = Tag(0x0028, 0x0108);
/// LargestPixelValueInSeries (0028,0109) US or SS 1
#[rustfmt::skip]
pub const LARGEST_PIXEL_VALUE_IN_SERIES: Tag = Tag(0x0028, 0x0109);
/// SmallestImagePixelValueInPlane (0028,0110) US or SS 1
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE_IN_PLANE: Tag = Tag(0x0028, 0x0110);
/// LargestImagePixelValueInPlane (0028,0111) US or SS 1
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE_IN_PLANE: Tag = Tag(0x0028, 0x0111);
/// PixelPaddingValue (0028,0120) US or SS 1
#[rustfmt::skip]
pub const PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0120);
/// PixelPaddingRangeLimit (0028,0121) US or SS 1
#[rustfmt::skip]
pub const PIXEL_PADDING_RANGE_LIMIT: Tag = Tag(0x0028, 0x0121);
/// FloatPixelPaddingValue (0028,0122) FL 1
#[rustfmt::skip]
pub const FLOAT_PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0122);
/// DoubleFloatPixelPaddingValue (0028,0123) FD 1
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0123);
/// FloatPixelPaddingRangeLimit (0028,0124) FL 1
#[rustfmt::skip]
pub const FLOAT_PIXEL_PADDING_RANGE_LIMIT: Tag = Tag(0x0028, 0x0124);
/// DoubleFloatPixelPaddingRangeLimit (0028,0125) FD 1
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_PADDING_RANGE_LIMIT: Tag = Tag(0x0028, 0x0125);
/// ImageLocation (0028,0200) US 1
#[rustfmt::skip]
pub const IMAGE_LOCATION: Tag = Tag(0x0028, 0x0200);
/// QualityControlImage (0028,0300) CS 1
#[rustfmt::skip]
pub const QUALITY_CONTROL_IMAGE: Tag = Tag(0x0028, 0x0300);
/// BurnedInAnnotation (0028,0301) CS 1
#[rustfmt::skip]
pub const BURNED_IN_ANNOTATION: Tag = Tag(0x0028, 0x0301);
/// RecognizableVisualFeatures (0028,0302) CS 1
#[rustfmt::skip]
pub const RECOGNIZABLE_VISUAL_FEATURES: Tag = Tag(0x0028, 0x0302);
/// LongitudinalTemporalInformationModified (0028,0303) CS 1
#[rustfmt::skip]
pub const LONGITUDINAL_TEMPORAL_INFORMATION_MODIFIED: Tag = Tag(0x0028, 0x0303);
/// ReferencedColorPaletteInstanceUID (0028,0304) UI 1
#[rustfmt::skip]
pub const REFERENCED_COLOR_PALETTE_INSTANCE_UID: Tag = Tag(0x0028, 0x0304);
/// TransformLabel (0028,0400) LO 1
#[rustfmt::skip]
pub const TRANSFORM_LABEL: Tag = Tag(0x0028, 0x0400);
/// TransformVersionNumber (0028,0401) LO 1
#[rustfmt::skip]
pub const TRANSFORM_VERSION_NUMBER: Tag = Tag(0x0028, 0x0401);
/// NumberOfTransformSteps (0028,0402) US 1
#[rustfmt::skip]
pub const NUMBER_OF_TRANSFORM_STEPS: Tag = Tag(0x0028, 0x0402);
/// SequenceOfCompressedData (0028,0403) LO 1-n
#[rustfmt::skip]
pub const SEQUENCE_OF_COMPRESSED_DATA: Tag = Tag(0x0028, 0x0403);
/// DetailsOfCoefficients (0028,0404) AT 1-n
#[rustfmt::skip]
pub const DETAILS_OF_COEFFICIENTS: Tag = Tag(0x0028, 0x0404);
/// DCTLabel (0028,0700) LO 1
#[rustfmt::skip]
pub const DCT_LABEL: Tag = Tag(0x0028, 0x0700);
/// DataBlockDescription (0028,0701) CS 1-n
#[rustfmt::skip]
pub const DATA_BLOCK_DESCRIPTION: Tag = Tag(0x0028, 0x0701);
/// DataBlock (0028,0702) AT 1-n
#[rustfmt::skip]
pub const DATA_BLOCK: Tag = Tag(0x0028, 0x0702);
/// NormalizationFactorFormat (0028,0710) US 1
#[rustfmt::skip]
pub const NORMALIZATION_FACTOR_FORMAT: Tag = Tag(0x0028, 0x0710);
/// ZonalMapNumberFormat (0028,0720) US 1
#[rustfmt::skip]
pub const ZONAL_MAP_NUMBER_FORMAT: Tag = Tag(0x0028, 0x0720);
/// ZonalMapLocation (0028,0721) AT 1-n
#[rustfmt::skip]
pub const ZONAL_MAP_LOCATION: Tag = Tag(0x0028, 0x0721);
/// ZonalMapFormat (0028,0722) US 1
#[rustfmt::skip]
pub const ZONAL_MAP_FORMAT: Tag = Tag(0x0028, 0x0722);
/// AdaptiveMapFormat (0028,0730) US 1
#[rustfmt::skip]
pub const ADAPTIVE_MAP_FORMAT: Tag = Tag(0x0028, 0x0730);
/// CodeNumberFormat (0028,0740) US 1
#[rustfmt::skip]
pub const CODE_NUMBER_FORMAT: Tag = Tag(0x0028, 0x0740);
/// PixelSpacingCalibrationType (0028,0A02) CS 1
#[rustfmt::skip]
pub const PIXEL_SPACING_CALIBRATION_TYPE: Tag = Tag(0x0028, 0x0A02);
/// PixelSpacingCalibrationDescription (0028,0A04) LO 1
#[rustfmt::skip]
pub const PIXEL_SPACING_CALIBRATION_DESCRIPTION: Tag = Tag(0x0028, 0x0A04);
/// PixelIntensityRelationship (0028,1040) CS 1
#[rustfmt::skip]
pub const PIXEL_INTENSITY_RELATIONSHIP: Tag = Tag(0x0028, 0x1040);
/// PixelIntensityRelationshipSign (0028,1041) SS 1
#[rustfmt::skip]
pub const PIXEL_INTENSITY_RELATIONSHIP_SIGN: Tag = Tag(0x0028, 0x1041);
/// WindowCenter (0028,1050) DS 1-n
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS 1-n
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS 1
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS 1
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RescaleType (0028,1054) LO 1
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// WindowCenterWidthExplanation (0028,1055) LO 1-n
#[rustfmt::skip]
pub const WINDOW_CENTER_WIDTH_EXPLANATION: Tag = Tag(0x0028, 0x1055);
/// VOILUTFunction (0028,1056) CS 1
#[rustfmt::skip]
pub const VOILUT_FUNCTION: Tag = Tag(0x0028, 0x1056);
/// GrayScale (0028,1080) CS 1
#[rustfmt::skip]
pub const GRAY_SCALE: Tag = Tag(0x0028, 0x1080);
/// RecommendedViewingMode (0028,1090) CS 1
#[rustfmt::skip]
pub const RECOMMENDED_VIEWING_MODE: Tag = Tag(0x0028, 0x1090);
/// GrayLookupTableDescriptor (0028,1100) US or SS 3
#[rustfmt::skip]
pub const GRAY_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1100);
/// RedPaletteColorLookupTableDescriptor (0028,1101) US or SS 3
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1101);
/// GreenPaletteColorLookupTableDescriptor (0028,1102) US or SS 3
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1102);
/// BluePaletteColorLookupTableDescriptor (0028,1103) US or SS 3
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1103);
/// AlphaPaletteColorLookupTableDescriptor (0028,1104) US 3
#[rustfmt::skip]
pub const ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1104);
/// LargeRedPaletteColorLookupTableDescriptor (0028,1111) US or SS 4
#[rustfmt::skip]
pub const LARGE_RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1111);
/// LargeGreenPaletteColorLookupTableDescriptor (0028,1112) US or SS 4
#[rustfmt::skip]
pub const LARGE_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1112);
/// LargeBluePaletteColorLookupTableDescriptor (0028,1113) US or SS 4
#[rustfmt::skip]
pub const LARGE_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1113);
/// PaletteColorLookupTableUID (0028,1199) UI 1
#[rustfmt::skip]
pub const PALETTE_COLOR_LOOKUP_TABLE_UID: Tag = Tag(0x0028, 0x1199);
/// RedPaletteColorLookupTableData (0028,1201) OW 1
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// GreenPaletteColorLookupTableData (0028,1202) OW 1
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1202);
/// BluePaletteColorLookupTableData (0028,1203) OW 1
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1203);
/// AlphaPaletteColorLookupTableData (0028,1204) OW 1
#[rustfmt::skip]
pub const ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1204);
/// LargeRedPaletteColorLookupTableData (0028,1211) OW 1
#[rustfmt::skip]
pub const LARGE_RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1211);
/// LargeGreenPaletteColorLookupTableData (0028,1212) OW 1
#[rustfmt::skip]
pub const LARGE_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1212);
/// LargeBluePaletteColorLookupTableData (0028,1213) OW 1
#[rustfmt::skip]
pub const LARGE_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1213);
/// LargePaletteColorLookupTableUID (0028,1214) UI 1
#[rustfmt::skip]
pub const LARGE_PALETTE_COLOR_LOOKUP_TABLE_UID: Tag = Tag(0x0028, 0x1214);
/// SegmentedRedPaletteColorLookupTableData (0028,1221) OW 1
#[rustfmt::skip]
pub const SEGMENTED_RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1221);
/// SegmentedGreenPaletteColorLookupTableData (0028,1222) OW 1
#[rustfmt::skip]
pub const SEGMENTED_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1222);
/// SegmentedBluePaletteColorLookupTableData (0028,1223) OW 1
#[rustfmt::skip]
pub const SEGMENTED_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1223);
/// SegmentedAlphaPaletteColorLookupTableData (0028,1224) OW 1
#[rustfmt::skip]
pub const SEGMENTED_ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1224);
/// StoredValueColorRangeSequence (0028,1230) SQ 1
#[rustfmt::skip]
pub const STORED_VALUE_COLOR_RANGE_SEQUENCE: Tag = Tag(0x0028, 0x1230);
/// MinimumStoredValueMapped (0028,1231) FD 1
#[rustfmt::skip]
pub const MINIMUM_STORED_VALUE_MAPPED: Tag = Tag(0x0028, 0x1231);
/// MaximumStoredValueMapped (0028,1232) FD 1
#[rustfmt::skip]
pub const MAXIMUM_STORED_VALUE_MAPPED: Tag = Tag(0x0028, 0x1232);
/// BreastImplantPresent (0028,1300) CS 1
#[rustfmt::skip]
pub const BREAST_IMPLANT_PRESENT: Tag = Tag(0x0028, 0x1300);
/// PartialView (0028,1350) CS 1
#[rustfmt::skip]
pub const PARTIAL_VIEW: Tag = Tag(0x0028, 0x1350);
/// PartialViewDescription (0028,1351) ST 1
#[rustfmt::skip]
pub const PARTIAL_VIEW_DESCRIPTION: Tag = Tag(0x0028, 0x1351);
/// PartialViewCodeSequence (0028,1352) SQ 1
#[rustfmt::skip]
pub const PARTIAL_VIEW_CODE_SEQUENCE: Tag = Tag(0x0028, 0x1352);
/// SpatialLocationsPreserved (0028,135A) CS 1
#[rustfmt::skip]
pub const SPATIAL_LOCATIONS_PRESERVED: Tag = Tag(0x0028, 0x135A);
/// DataFrameAssignmentSequence (0028,1401) SQ 1
#[rustfmt::skip]
pub const DATA_FRAME_ASSIGNMENT_SEQUENCE: Tag = Tag(0x0028, 0x1401);
/// DataPathAssignment (0028,1402) CS 1
#[rustfmt::skip]
pub const DATA_PATH_ASSIGNMENT: Tag = Tag(0x0028, 0x1402);
/// BitsMappedToColorLookupTable (0028,1403) US 1
#[rustfmt::skip]
pub const BITS_MAPPED_TO_COLOR_LOOKUP_TABLE: Tag = Tag(0x0028, 0x1403);
/// BlendingLUT1Sequence (0028,1404) SQ 1
#[rustfmt::skip]
pub const BLENDING_LUT1_SEQUENCE: Tag = Tag(0x0028, 0x1404);
/// BlendingLUT1TransferFunction (0028,1405) CS 1
#[rustfmt::skip]
pub const BLENDING_LUT1_TRANSFER_FUNCTION: Tag = Tag(0x0028, 0x1405);
/// BlendingWeightConstant (0028,1406) FD 1
#[rustfmt::skip]
pub const BLENDING_WEIGHT_CONSTANT: Tag = Tag(0x0028, 0x1406);
/// BlendingLookupTableDescriptor (0028,1407) US 3
#[rustfmt::skip]
pub const BLENDING_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1407);
/// BlendingLookupTableData (0028,1408) OW 1
#[rustfmt::skip]
pub const BLENDING_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1408);
/// EnhancedPaletteColorLookupTableSequence (0028,140B) SQ 1
#[rustfmt::skip]
pub const ENHANCED_PALETTE_COLOR_LOOKUP_TABLE_SEQUENCE: Tag = Tag(0x0028, 0x140B);
/// BlendingLUT2Sequence (0028,140C) SQ 1
#[rustfmt::skip]
pub const BLENDING_LUT2_SEQUENCE: Tag = Tag(0x0028, 0x140C);
/// BlendingLUT2TransferFunction (0028,140D) CS 1
#[rustfmt::skip]
pub const BLENDING_LUT2_TRANSFER_FUNCTION: Tag = Tag(0x0028, 0x140D);
/// DataPathID (0028,140E) CS 1
#[rustfmt::skip]
pub const DATA_PATH_ID: Tag = Tag(0x0028, 0x140E);
/// RGBLUTTransferFunction (0028,140F) CS 1
#[rustfmt::skip]
pub const RGBLUT_TRANSFER_FUNCTION: Tag = Tag(0x0028, 0x140F);
/// AlphaLUTTransferFunction (0028,1410) CS 1
#[rustfmt::skip]
pub const ALPHA_LUT_TRANSFER_FUNCTION: Tag = Tag(0x0028, 0x1410);
/// ICCProfile (0028,2000) OB 1
#[rustfmt::skip]
pub const ICC_PROFILE: Tag = Tag(0x0028, 0x2000);
/// ColorSpace (0028,2002) CS 1
#[rustfmt::skip]
pub const COLOR_SPACE: Tag = Tag(0x0028, 0x2002);
/// LossyImageCompression (0028,2110) CS 1
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// LossyImageCompressionRatio (0028,2112) DS 1-n
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// LossyImageCompressionMethod (0028,2114) CS 1-n
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_METHOD: Tag = Tag(0x0028, 0x2114);
/// ModalityLUTSequence (0028,3000) SQ 1
#[rustfmt::skip]
pub const MODALITY_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3000);
/// VariableModalityLUTSequence (0028,3001) SQ 1
#[rustfmt::skip]
pub const VARIABLE_MODALITY_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3001);
/// LUTDescriptor (0028,3002) US or SS 3
#[rustfmt::skip]
pub const LUT_DESCRIPTOR: Tag = Tag(0x0028, 0x3002);
/// LUTExplanation (0028,3003) LO 1
#[rustfmt::skip]
pub const LUT_EXPLANATION: Tag = Tag(0x0028, 0x3003);
/// ModalityLUTType (0028,3004) LO 1
#[rustfmt::skip]
pub const MODALITY_LUT_TYPE: Tag = Tag(0x0028, 0x3004);
/// LUTData (0028,3006) US or OW 1-n
#[rustfmt::skip]
pub const LUT_DATA: Tag = Tag(0x0028, 0x3006);
/// VOILUTSequence (0028,3010) SQ 1
#[rustfmt::skip]
pub const VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x3010);
/// SoftcopyVOILUTSequence (0028,3110) SQ 1
#[rustfmt::skip]
pub const SOFTCOPY_VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x3110);
/// ImagePresentationComments (0028,4000) LT 1
#[rustfmt::skip]
pub const IMAGE_PRESENTATION_COMMENTS: Tag = Tag(0x0028, 0x4000);
/// BiPlaneAcquisitionSequence (0028,5000) SQ 1
#[rustfmt::skip]
pub const BI_PLANE_ACQUISITION_SEQUENCE: Tag = Tag(0x0028, 0x5000);
/// RepresentativeFrameNumber (0028,6010) US 1
#[rustfmt::skip]
pub const REPRESENTATIVE_FRAME_NUMBER: Tag = Tag(0x0028, 0x6010);
/// FrameNumbersOfInterest (0028,6020) US 1-n
#[rustfmt::skip]
pub const FRAME_NUMBERS_OF_INTEREST: Tag = Tag(0x0028, 0x6020);
/// FrameOfInterestDescription (0028,6022) LO 1-n
#[rustfmt::skip]
pub const FRAME_OF_INTEREST_DESCRIPTION: Tag = Tag(0x0028, 0x6022);
/// FrameOfInterestType (0028,6023) CS 1-n
#[rustfmt::skip]
pub const FRAME_OF_INTEREST_TYPE: Tag = Tag(0x0028, 0x6023);
/// MaskPointers (0028,6030) US 1-n
#[rustfmt::skip]
pub const MASK_POINTERS: Tag = Tag(0x0028, 0x6030);
/// RWavePointer (0028,6040) US 1-n
#[rustfmt::skip]
pub const R_WAVE_POINTER: Tag = Tag(0x0028, 0x6040);
/// MaskSubtractionSequence (0028,6100) SQ 1
#[rustfmt::skip]
pub const MASK_SUBTRACTION_SEQUENCE: Tag = Tag(0x0028, 0x6100);
/// MaskOperation (0028,6101) CS 1
#[rustfmt::skip]
pub const MASK_OPERATION: Tag = Tag(0x0028, 0x6101);
/// ApplicableFrameRange (0028,6102) US 2-2n
#[rustfmt::skip]
pub const APPLICABLE_FRAME_RANGE: Tag = Tag(0x0028, 0x6102);
/// MaskFrameNumbers (0028,6110) US 1-n
#[rustfmt::skip]
pub const MASK_FRAME_NUMBERS: Tag = Tag(0x0028, 0x6110);
/// ContrastFrameAveraging (0028,6112) US 1
#[rustfmt::skip]
pub const CONTRAST_FRAME_AVERAGING: Tag = Tag(0x0028, 0x6112);
/// MaskSubPixelShift (0028,6114) FL 2
#[rustfmt::skip]
pub const MASK_SUB_PIXEL_SHIFT: Tag = Tag(0x0028, 0x6114);
/// TIDOffset (0028,6120) SS 1
#[rustfmt::skip]
pub const TID_OFFSET: Tag = Tag(0x0028, 0x6120);
/// MaskOperationExplanation (0028,6190) ST 1
#[rustfmt::skip]
pub const MASK_OPERATION_EXPLANATION: Tag = Tag(0x0028, 0x6190);
/// DataPointRows (0028,9001) UL 1
#[rustfmt::skip]
pub const DATA_POINT_ROWS: Tag = Tag(0x0028, 0x9001);
/// DataPointColumns (0028,9002) UL 1
#[rustfmt::skip]
pub const DATA_POINT_COLUMNS: Tag = Tag(0x0028, 0x9002);
/// SignalDomainColumns (0028,9003) CS 1
#[rustfmt::skip]
pub const SIGNAL_DOMAIN_COLUMNS: Tag = Tag(0x0028, 0x9003);
/// LargestMonochromePixelValue (0028,9099) US 1
#[rustfmt::skip]
pub const LARGEST_MONOCHROME_PIXEL_VALUE: Tag = Tag(0x0028, 0x9099);
/// DataRepresentation (0028,9108) CS 1
#[rustfmt::skip]
pub const DATA_REPRESENTATION: Tag = Tag(0x0028, 0x9108);
/// PixelMeasuresSequence (0028,9110) SQ 1
#[rustfmt::skip]
pub const PIXEL_MEASURES_SEQUENCE: Tag = Tag(0x0028, 0x9110);
/// FrameVOILUTSequence (0028,9132) SQ 1
#[rustfmt::skip]
pub const FRAME_VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x9132);
/// PixelValueTransformationSequence (0028,9145) SQ 1
#[rustfmt::skip]
pub const PIXEL_VALUE_TRANSFORMATION_SEQUENCE: Tag = Tag(0x0028, 0x9145);
/// SignalDomainRows (0028,9235) CS 1
#[rustfmt::skip]
pub const SIGNAL_DOMAIN_ROWS: Tag = Tag(0x0028, 0x9235);
/// DisplayFilterPercentage (0028,9411) FL 1
#[rustfmt::skip]
pub const DISPLAY_FILTER_PERCENTAGE: Tag = Tag(0x0028, 0x9411);
/// FramePixelShiftSequence (0028,9415) SQ 1
#[rustfmt::skip]
pub const FRAME_PIXEL_SHIFT_SEQUENCE: Tag = Tag(0x0028, 0x9415);
/// SubtractionItemID (0028,9416) US 1
#[rustfmt::skip]
pub const SUBTRACTION_ITEM_ID: Tag = Tag(0x0028, 0x9416);
/// PixelIntensityRelationshipLUTSequence (0028,9422) SQ 1
#[rustfmt::skip]
pub const PIXEL_INTENSITY_RELATIONSHIP_LUT_SEQUENCE: Tag = Tag(0x0028, 0x9422);
/// FramePixelDataPropertiesSequence (0028,9443) SQ 1
#[rustfmt::skip]
pub const FRAME_PIXEL_DATA_PROPERTIES_SEQUENCE: Tag = Tag(0x0028, 0x9443);
/// GeometricalProperties (0028,9444) CS 1
#[rustfmt::skip]
pub const GEOMETRICAL_PROPERTIES: Tag = Tag(0x0028, 0x9444);
/// GeometricMaximumDistortion (0028,9445) FL 1
#[rustfmt::skip]
pub const GEOMETRIC_MAXIMUM_DISTORTION: Tag = Tag(0x0028, 0x9445);
/// ImageProcessingApplied (0028,9446) CS 1-n
#[rustfmt::skip]
pub const IMAGE_PROCESSING_APPLIED: Tag = Tag(0x0028, 0x9446);
/// MaskSelectionMode (0028,9454) CS 1
#[rustfmt::skip]
pub const MASK_SELECTION_MODE: Tag = Tag(0x0028, 0x9454);
/// LUTFunction (0028,9474) CS 1
#[rustfmt::skip]
pub const LUT_FUNCTION: Tag = Tag(0x0028, 0x9474);
/// MaskVisibilityPercentage (0028,9478) FL 1
#[rustfmt::skip]
pub const MASK_VISIBILITY_PERCENTAGE: Tag = Tag(0x0028, 0x9478);
/// PixelShiftSequence (0028,9501) SQ 1
#[rustfmt::skip]
pub const PIXEL_SHIFT_SEQUENCE: Tag = Tag(0x0028, 0x9501);
/// RegionPixelShiftSequence (0028,9502) SQ 1
#[rustfmt::skip]
pub const REGION_PIXEL_SHIFT_SEQUENCE: Tag = Tag(0x0028, 0x9502);
/// VerticesOfTheRegion (0028,9503) SS 2-2n
#[rustfmt::skip]
pub const VERTICES_OF_THE_REGION: Tag = Tag(0x0028, 0x9503);
/// MultiFramePresentationSequence (0028,9505) SQ 1
#[rustfmt::skip]
pub const MULTI_FRAME_PRESENTATION_SEQUENCE: Tag = Tag(0x0028, 0x9505);
/// PixelShiftFrameRange (0028,9506) US 2-2n
#[rustfmt::skip]
pub const PIXEL_SHIFT_FRAME_RANGE: Tag = Tag(0x0028, 0x9506);
/// LUTFrameRange (0028,9507) US 2-2n
#[rustfmt::skip]
pub const LUT_FRAME_RANGE: Tag = Tag(0x0028, 0x9507);
/// ImageToEquipmentMappingMatrix (0028,9520) DS 16
#[rustfmt::skip]
pub const IMAGE_TO_EQUIPMENT_MAPPING_MATRIX: Tag = Tag(0x0028, 0x9520);
/// EquipmentCoordinateSystemIdentification (0028,9537) CS 1
#[rustfmt::skip]
pub const EQUIPMENT_COORDINATE_SYSTEM_IDENTIFICATION: Tag = Tag(0x0028, 0x9537);
/// StudyStatusID (0032,000A) CS 1
#[rustfmt::skip]
pub const STUDY_STATUS_ID: Tag = Tag(0x0032, 0x000A);
/// StudyPriorityID (0032,000C) CS 1
#[rustfmt::skip]
pub const STUDY_PRIORITY_ID: Tag = Tag(0x0032, 0x000C);
/// StudyIDIssuer (0032,0012) LO 1
#[rustfmt::skip]
pub const STUDY_ID_ISSUER: Tag = Tag(0x0032, 0x0012);
/// StudyVerifiedDate (0032,0032) DA 1
#[rustfmt::skip]
pub const STUDY_VERIFIED_DATE: Tag = Tag(0x0032, 0x0032);
/// StudyVerifiedTime (0032,0033) TM 1
#[rustfmt::skip]
pub const STUDY_VERIFIED_TIME: Tag = Tag(0x0032, 0x0033);
/// StudyReadDate (0032,0034) DA 1
#[rustfmt::skip]
pub const STUDY_READ_DATE: Tag = Tag(0x0032, 0x0034);
/// StudyReadTime (0032,0035) TM 1
#[rustfmt::skip]
pub const STUDY_READ_TIME: Tag = Tag(0x0032, 0x0035);
/// ScheduledStudyStartDate (0032,1000) DA 1
#[rustfmt::skip]
pub const SCHEDULED_STUDY_START_DATE: Tag = Tag(0x0032, 0x1000);
/// ScheduledStudyStartTime (0032,1001) TM 1
#[rustfmt::skip]
pub const SCHEDULED_STUDY_START_TIME: Tag = Tag(0x0032, 0x1001);
/// ScheduledStudyStopDate (0032,1010) DA 1
#[rustfmt::skip]
pub const SCHEDULED_STUDY_STOP_DATE: Tag = Tag(0x0032, 0x1010);
/// ScheduledStudyStopTime (0032,1011) TM 1
#[rustfmt::skip]
pub const SCHEDULED_STUDY_STOP_TIME: Tag = Tag(0x0032, 0x1011);
/// ScheduledStudyLocation (0032,1020) LO 1
#[rustfmt::skip]
pub const SCHEDULED_STUDY_LOCATION: Tag = Tag(0x0032, 0x1020);
/// ScheduledStudyLocationAETitle (0032,1021) AE 1-n
#[rustfmt::skip]
pub const SCHEDULED_STUDY_LOCATION_AE_TITLE: Tag = Tag(0x0032, 0x1021);
/// ReasonForStudy (0032,1030) LO 1
#[rustfmt::skip]
pub const REASON_FOR_STUDY: Tag = Tag(0x0032, 0x1030);
/// RequestingPhysicianIdentificationSequence (0032,1031) SQ 1
#[rustfmt::skip]
pub const REQUESTING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0032, 0x1031);
/// RequestingPhysician (0032,1032) PN 1
#[rustfmt::skip]
pub const REQUESTING_PHYSICIAN: Tag = Tag(0x0032, 0x1032);
/// RequestingService (0032,1033) LO 1
#[rustfmt::skip]
pub const REQUESTING_SERVICE: Tag = Tag(0x0032, 0x1033);
/// RequestingServiceCodeSequence (0032,1034) SQ 1
#[rustfmt::skip]
pub const REQUESTING_SERVICE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1034);
/// StudyArrivalDate (0032,1040) DA 1
#[rustfmt::skip]
pub const STUDY_ARRIVAL_DATE: Tag = Tag(0x0032, 0x1040);
/// StudyArrivalTime (0032,1041) TM 1
#[rustfmt::skip]
pub const STUDY_ARRIVAL_TIME: Tag = Tag(0x0032, 0x1041);
/// StudyCompletionDate (0032,1050) DA 1
#[rustfmt::skip]
pub const STUDY_COMPLETION_DATE: Tag = Tag(0x0032, 0x1050);
/// StudyCompletionTime (0032,1051) TM 1
#[rustfmt::skip]
pub const STUDY_COMPLETION_TIME: Tag = Tag(0x0032, 0x1051);
/// StudyComponentStatusID (0032,1055) CS 1
#[rustfmt::skip]
pub const STUDY_COMPONENT_STATUS_ID: Tag = Tag(0x0032, 0x1055);
/// RequestedProcedureDescription (0032,1060) LO 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// RequestedProcedureCodeSequence (0032,1064) SQ 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1064);
/// ReasonForVisit (0032,1066) UT 1
#[rustfmt::skip]
pub const REASON_FOR_VISIT: Tag = Tag(0x0032, 0x1066);
/// ReasonForVisitCodeSequence (0032,1067) SQ 1
#[rustfmt::skip]
pub const REASON_FOR_VISIT_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1067);
/// RequestedContrastAgent (0032,1070) LO 1
#[rustfmt::skip]
pub const REQUESTED_CONTRAST_AGENT: Tag = Tag(0x0032, 0x1070);
/// StudyComments (0032,4000) LT 1
#[rustfmt::skip]
pub const STUDY_COMMENTS: Tag = Tag(0x0032, 0x4000);
/// ReferencedPatientAliasSequence (0038,0004) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PATIENT_ALIAS_SEQUENCE: Tag = Tag(0x0038, 0x0004);
/// VisitStatusID (0038,0008) CS 1
#[rustfmt::skip]
pub const VISIT_STATUS_ID: Tag = Tag(0x0038, 0x0008);
/// AdmissionID (0038,0010) LO 1
#[rustfmt::skip]
pub const ADMISSION_ID: Tag = Tag(0x0038, 0x0010);
/// IssuerOfAdmissionID (0038,0011) LO 1
#[rustfmt::skip]
pub const ISSUER_OF_ADMISSION_ID: Tag = Tag(0x0038, 0x0011);
/// IssuerOfAdmissionIDSequence (0038,0014) SQ 1
#[rustfmt::skip]
pub const ISSUER_OF_ADMISSION_ID_SEQUENCE: Tag = Tag(0x0038, 0x0014);
/// RouteOfAdmissions (0038,0016) LO 1
#[rustfmt::skip]
pub const ROUTE_OF_ADMISSIONS: Tag = Tag(0x0038, 0x0016);
/// ScheduledAdmissionDate (0038,001A) DA 1
#[rustfmt::skip]
pub const SCHEDULED_ADMISSION_DATE: Tag = Tag(0x0038, 0x001A);
/// ScheduledAdmissionTime (0038,001B) TM 1
#[rustfmt::skip]
pub const SCHEDULED_ADMISSION_TIME: Tag = Tag(0x0038, 0x001B);
/// ScheduledDischargeDate (0038,001C) DA 1
#[rustfmt::skip]
pub const SCHEDULED_DISCHARGE_DATE: Tag = Tag(0x0038, 0x001C);
/// ScheduledDischargeTime (0038,001D) TM 1
#[rustfmt::skip]
pub const SCHEDULED_DISCHARGE_TIME: Tag = Tag(0x0038, 0x001D);
/// ScheduledPatientInstitutionResidence (0038,001E) LO 1
#[rustfmt::skip]
pub const SCHEDULED_PATIENT_INSTITUTION_RESIDENCE: Tag = Tag(0x0038, 0x001E);
/// AdmittingDate (0038,0020) DA 1
#[rustfmt::skip]
pub const ADMITTING_DATE: Tag = Tag(0x0038, 0x0020);
/// AdmittingTime (0038,0021) TM 1
#[rustfmt::skip]
pub const ADMITTING_TIME: Tag = Tag(0x0038, 0x0021);
/// DischargeDate (0038,0030) DA 1
#[rustfmt::skip]
pub const DISCHARGE_DATE: Tag = Tag(0x0038, 0x0030);
/// DischargeTime (0038,0032) TM 1
#[rustfmt::skip]
pub const DISCHARGE_TIME: Tag = Tag(0x0038, 0x0032);
/// DischargeDiagnosisDescription (0038,0040) LO 1
#[rustfmt::skip]
pub const DISCHARGE_DIAGNOSIS_DESCRIPTION: Tag = Tag(0x0038, 0x0040);
/// DischargeDiagnosisCodeSequence (0038,0044) SQ 1
#[rustfmt::skip]
pub const DISCHARGE_DIAGNOSIS_CODE_SEQUENCE: Tag = Tag(0x0038, 0x0044);
/// SpecialNeeds (0038,0050) LO 1
#[rustfmt::skip]
pub const SPECIAL_NEEDS: Tag = Tag(0x0038, 0x0050);
/// ServiceEpisodeID (0038,0060) LO 1
#[rustfmt::skip]
pub const SERVICE_EPISODE_ID: Tag = Tag(0x0038, 0x0060);
/// IssuerOfServiceEpisodeID (0038,0061) LO 1
#[rustfmt::skip]
pub const ISSUER_OF_SERVICE_EPISODE_ID: Tag = Tag(0x0038, 0x0061);
/// ServiceEpisodeDescription (0038,0062) LO 1
#[rustfmt::skip]
pub const SERVICE_EPISODE_DESCRIPTION: Tag = Tag(0x0038, 0x0062);
/// IssuerOfServiceEpisodeIDSequence (0038,0064) SQ 1
#[rustfmt::skip]
pub const ISSUER_OF_SERVICE_EPISODE_ID_SEQUENCE: Tag = Tag(0x0038, 0x0064);
/// PertinentDocumentsSequence (0038,0100) SQ 1
#[rustfmt::skip]
pub const PERTINENT_DOCUMENTS_SEQUENCE: Tag = Tag(0x0038, 0x0100);
/// CurrentPatientLocation (0038,0300) LO 1
#[rustfmt::skip]
pub const CURRENT_PATIENT_LOCATION: Tag = Tag(0x0038, 0x0300);
/// PatientInstitutionResidence (0038,0400) LO 1
#[rustfmt::skip]
pub const PATIENT_INSTITUTION_RESIDENCE: Tag = Tag(0x0038, 0x0400);
/// PatientState (0038,0500) LO 1
#[rustfmt::skip]
pub const PATIENT_STATE: Tag = Tag(0x0038, 0x0500);
/// PatientClinicalTrialParticipationSequence (0038,0502) SQ 1
#[rustfmt::skip]
pub const PATIENT_CLINICAL_TRIAL_PARTICIPATION_SEQUENCE: Tag = Tag(0x0038, 0x0502);
/// VisitComments (0038,4000) LT 1
#[rustfmt::skip]
pub const VISIT_COMMENTS: Tag = Tag(0x0038, 0x4000);
/// ScheduledStationAETitle (0040,0001) AE 1-n
#[rustfmt::skip]
pub const SCHEDULED_STATION_AE_TITLE: Tag = Tag(0x0040, 0x0001);
/// ScheduledProcedureStepStartDate (0040,0002) DA 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0002);
/// ScheduledProcedureStepStartTime (0040,0003) TM 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0003);
/// ScheduledProcedureStepEndDate (0040,0004) DA 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_END_DATE: Tag = Tag(0x0040, 0x0004);
/// ScheduledProcedureStepEndTime (0040,0005) TM 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_END_TIME: Tag = Tag(0x0040, 0x0005);
/// ScheduledPerformingPhysicianName (0040,0006) PN 1
#[rustfmt::skip]
pub const SCHEDULED_PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0040, 0x0006);
/// ScheduledProcedureStepDescription (0040,0007) LO 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0007);
/// ScheduledProtocolCodeSequence (0040,0008) SQ 1
#[rustfmt::skip]
pub const SCHEDULED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0008);
/// ScheduledProcedureStepID (0040,0009) SH 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0009);
/// StageCodeSequence (0040,000A) SQ 1
#[rustfmt::skip]
pub const STAGE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x000A);
/// ScheduledPerformingPhysicianIdentificationSequence (0040,000B) SQ 1
#[rustfmt::skip]
pub const SCHEDULED_PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0040, 0x000B);
/// ScheduledStationName (0040,0010) SH 1-n
#[rustfmt::skip]
pub const SCHEDULED_STATION_NAME: Tag = Tag(0x0040, 0x0010);
/// ScheduledProcedureStepLocation (0040,0011) SH 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_LOCATION: Tag = Tag(0x0040, 0x0011);
/// PreMedication (0040,0012) LO 1
#[rustfmt::skip]
pub const PRE_MEDICATION: Tag = Tag(0x0040, 0x0012);
/// ScheduledProcedureStepStatus (0040,0020) CS 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_STATUS: Tag = Tag(0x0040, 0x0020);
/// OrderPlacerIdentifierSequence (0040,0026) SQ 1
#[rustfmt::skip]
pub const ORDER_PLACER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0026);
/// OrderFillerIdentifierSequence (0040,0027) SQ 1
#[rustfmt::skip]
pub const ORDER_FILLER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0027);
/// LocalNamespaceEntityID (0040,0031) UT 1
#[rustfmt::skip]
pub const LOCAL_NAMESPACE_ENTITY_ID: Tag = Tag(0x0040, 0x0031);
/// UniversalEntityID (0040,0032) UT 1
#[rustfmt::skip]
pub const UNIVERSAL_ENTITY_ID: Tag = Tag(0x0040, 0x0032);
/// UniversalEntityIDType (0040,0033) CS 1
#[rustfmt::skip]
pub const UNIVERSAL_ENTITY_ID_TYPE: Tag = Tag(0x0040, 0x0033);
/// IdentifierTypeCode (0040,0035) CS 1
#[rustfmt::skip]
pub const IDENTIFIER_TYPE_CODE: Tag = Tag(0x0040, 0x0035);
/// AssigningFacilitySequence (0040,0036) SQ 1
#[rustfmt::skip]
pub const ASSIGNING_FACILITY_SEQUENCE: Tag = Tag(0x0040, 0x0036);
/// AssigningJurisdictionCodeSequence (0040,0039) SQ 1
#[rustfmt::skip]
pub const ASSIGNING_JURISDICTION_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0039);
/// AssigningAgencyOrDepartmentCodeSequence (0040,003A) SQ 1
#[rustfmt::skip]
pub const ASSIGNING_AGENCY_OR_DEPARTMENT_CODE_SEQUENCE: Tag = Tag(0x0040, 0x003A);
/// ScheduledProcedureStepSequence (0040,0100) SQ 1
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x0100);
/// ReferencedNonImageCompositeSOPInstanceSequence (0040,0220) SQ 1
#[rustfmt::skip]
pub const REFERENCED_NON_IMAGE_COMPOSITE_SOP_INSTANCE_SEQUENCE: Tag = Tag(0x0040, 0x0220);
/// PerformedStationAETitle (0040,0241) AE 1
#[rustfmt::skip]
pub const PERFORMED_STATION_AE_TITLE: Tag = Tag(0x0040, 0x0241);
/// PerformedStationName (0040,0242) SH 1
#[rustfmt::skip]
pub const PERFORMED_STATION_NAME: Tag = Tag(0x0040, 0x0242);
/// PerformedLocation (0040,0243) SH 1
#[rustfmt::skip]
pub const PERFORMED_LOCATION: Tag = Tag(0x0040, 0x0243);
/// PerformedProcedureStepStartDate (0040,0244) DA 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// PerformedProcedureStepStartTime (0040,0245) TM 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// PerformedProcedureStepEndDate (0040,0250) DA 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_END_DATE: Tag = Tag(0x0040, 0x0250);
/// PerformedProcedureStepEndTime (0040,0251) TM 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_END_TIME: Tag = Tag(0x0040, 0x0251);
/// PerformedProcedureStepStatus (0040,0252) CS 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_STATUS: Tag = Tag(0x0040, 0x0252);
/// PerformedProcedureStepID (0040,0253) SH 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0253);
/// PerformedProcedureStepDescription (0040,0254) LO 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// PerformedProcedureTypeDescription (0040,0255) LO 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_TYPE_DESCRIPTION: Tag = Tag(0x0040, 0x0255);
/// PerformedProtocolCodeSequence (0040,0260) SQ 1
#[rustfmt::skip]
pub const PERFORMED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0260);
/// PerformedProtocolType (0040,0261) CS 1
#[rustfmt::skip]
pub const PERFORMED_PROTOCOL_TYPE: Tag = Tag(0x0040, 0x0261);
/// ScheduledStepAttributesSequence (0040,0270) SQ 1
#[rustfmt::skip]
pub const SCHEDULED_STEP_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0270);
/// RequestAttributesSequence (0040,0275) SQ 1
#[rustfmt::skip]
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// CommentsOnThePerformedProcedureStep (0040,0280) ST 1
#[rustfmt::skip]
pub const COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP: Tag = Tag(0x0040, 0x0280);
/// PerformedProcedureStepDiscontinuationReasonCodeSequence (0040,0281) SQ 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DISCONTINUATION_REASON_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0281);
/// QuantitySequence (0040,0293) SQ 1
#[rustfmt::skip]
pub const QUANTITY_SEQUENCE: Tag = Tag(0x0040, 0x0293);
/// Quantity (0040,0294) DS 1
#[rustfmt::skip]
pub const QUANTITY: Tag = Tag(0x0040, 0x0294);
/// MeasuringUnitsSequence (0040,0295) SQ 1
#[rustfmt::skip]
pub const MEASURING_UNITS_SEQUENCE: Tag = Tag(0x0040, 0x0295);
/// BillingItemSequence (0040,0296) SQ 1
#[rustfmt::skip]
pub const BILLING_ITEM_SEQUENCE: Tag = Tag(0x0040, 0x0296);
/// TotalTimeOfFluoroscopy (0040,0300) US 1
#[rustfmt::skip]
pub const TOTAL_TIME_OF_FLUOROSCOPY: Tag = Tag(0x0040, 0x0300);
/// TotalNumberOfExposures (0040,0301) US 1
#[rustfmt::skip]
pub const TOTAL_NUMBER_OF_EXPOSURES: Tag = Tag(0x0040, 0x0301);
/// EntranceDose (0040,0302) US 1
#[rustfmt::skip]
pub const ENTRANCE_DOSE: Tag = Tag(0x0040, 0x0302);
/// ExposedArea (0040,0303) US 1-2
#[rustfmt::skip]
pub const EXPOSED_AREA: Tag = Tag(0x0040, 0x0303);
/// DistanceSourceToEntrance (0040,0306) DS 1
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_ENTRANCE: Tag = Tag(0x0040, 0x0306);
/// DistanceSourceToSupport (0040,0307) DS 1
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_SUPPORT: Tag = Tag(0x0040, 0x0307);
/// ExposureDoseSequence (0040,030E) SQ 1
#[rustfmt::skip]
pub const EXPOSURE_DOSE_SEQUENCE: Tag = Tag(0x0040, 0x030E);
/// CommentsOnRadiationDose (0040,0310) ST 1
#[rustfmt::skip]
pub const COMMENTS_ON_RADIATION_DOSE: Tag = Tag(0x0040, 0x0310);
/// XRayOutput (0040,0312) DS 1
#[rustfmt::skip]
pub const X_RAY_OUTPUT: Tag = Tag(0x0040, 0x0312);
/// HalfValueLayer (0040,0314) DS 1
#[rustfmt::skip]
pub const HALF_VALUE_LAYER: Tag = Tag(0x0040, 0x0314);
/// OrganDose (0040,0316) DS 1
#[rustfmt::skip]
pub const ORGAN_DOSE: Tag = Tag(0x0040, 0x0316);
/// OrganExposed (0040,0318) CS 1
#[rustfmt::skip]
pub const ORGAN_EXPOSED: Tag = Tag(0x0040, 0x0318);
/// BillingProcedureStepSequence (0040,0320) SQ 1
#[rustfmt::skip]
pub const BILLING_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x0320);
/// FilmConsumptionSequence (0040,0321) SQ 1
#[rustfmt::skip]
pub const FILM_CONSUMPTION_SEQUENCE: Tag = Tag(0x0040, 0x0321);
/// BillingSuppliesAndDevicesSequence (0040,0324) SQ 1
#[rustfmt::skip]
pub const BILLING_SUPPLIES_AND_DEVICES_SEQUENCE: Tag = Tag(0x0040, 0x0324);
/// ReferencedProcedureStepSequence (0040,0330) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x0330);
/// PerformedSeriesSequence (0040,0340) SQ 1
#[rustfmt::skip]
pub const PERFORMED_SERIES_SEQUENCE: Tag = Tag(0x0040, 0x0340);
/// CommentsOnTheScheduledProcedureStep (0040,0400) LT 1
#[rustfmt::skip]
pub const COMMENTS_ON_THE_SCHEDULED_PROCEDURE_STEP: Tag = Tag(0x0040, 0x0400);
/// ProtocolContextSequence (0040,0440) SQ 1
#[rustfmt::skip]
pub const PROTOCOL_CONTEXT_SEQUENCE: Tag = Tag(0x0040, 0x0440);
/// ContentItemModifierSequence (0040,0441) SQ 1
#[rustfmt::skip]
pub const CONTENT_ITEM_MODIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0441);
/// ScheduledSpecimenSequence (0040,0500) SQ 1
#[rustfmt::skip]
pub const SCHEDULED_SPECIMEN_SEQUENCE: Tag = Tag(0x0040, 0x0500);
/// SpecimenAccessionNumber (0040,050A) LO 1
#[rustfmt::skip]
pub const SPECIMEN_ACCESSION_NUMBER: Tag = Tag(0x0040, 0x050A);
/// ContainerIdentifier (0040,0512) LO 1
#[rustfmt::skip]
pub const CONTAINER_IDENTIFIER: Tag = Tag(0x0040, 0x0512);
/// IssuerOfTheContainerIdentifierSequence (0040,0513) SQ 1
#[rustfmt::skip]
pub const ISSUER_OF_THE_CONTAINER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0513);
/// AlternateContainerIdentifierSequence (0040,0515) SQ 1
#[rustfmt::skip]
pub const ALTERNATE_CONTAINER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0515);
/// ContainerTypeCodeSequence (0040,0518) SQ 1
#[rustfmt::skip]
pub const CONTAINER_TYPE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0518);
/// ContainerDescription (0040,051A) LO 1
#[rustfmt::skip]
pub const CONTAINER_DESCRIPTION: Tag = Tag(0x0040, 0x051A);
/// ContainerComponentSequence (0040,0520) SQ 1
#[rustfmt::skip]
pub const CONTAINER_COMPONENT_SEQUENCE: Tag = Tag(0x0040, 0x0520);
/// SpecimenSequence (0040,0550) SQ 1
#[rustfmt::skip]
pub const SPECIMEN_SEQUENCE: Tag = Tag(0x0040, 0x0550);
/// SpecimenIdentifier (0040,0551) LO 1
#[rustfmt::skip]
pub const SPECIMEN_IDENTIFIER: Tag = Tag(0x0040, 0x0551);
/// SpecimenDescriptionSequenceTrial (0040,0552) SQ 1
#[rustfmt::skip]
pub const SPECIMEN_DESCRIPTION_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0x0552);
/// SpecimenDescriptionTrial (0040,0553) ST 1
#[rustfmt::skip]
pub const SPECIMEN_DESCRIPTION_TRIAL: Tag = Tag(0x0040, 0x0553);
/// SpecimenUID (0040,0554) UI 1
#[rustfmt::skip]
pub const SPECIMEN_UID: Tag = Tag(0x0040, 0x0554);
/// AcquisitionContextSequence (0040,0555) SQ 1
#[rustfmt::skip]
pub const ACQUISITION_CONTEXT_SEQUENCE: Tag = Tag(0x0040, 0x0555);
/// AcquisitionContextDescription (0040,0556) ST 1
#[rustfmt::skip]
pub const ACQUISITION_CONTEXT_DESCRIPTION: Tag = Tag(0x0040, 0x0556);
/// SpecimenDescriptionSequence (0040,0560) SQ 1
#[rustfmt::skip]
pub const SPECIMEN_DESCRIPTION_SEQUENCE: Tag = Tag(0x0040, 0x0560);
/// IssuerOfTheSpecimenIdentifierSequence (0040,0562) SQ 1
#[rustfmt::skip]
pub const ISSUER_OF_THE_SPECIMEN_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0562);
/// SpecimenTypeCodeSequence (0040,059A) SQ 1
#[rustfmt::skip]
pub const SPECIMEN_TYPE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x059A);
/// SpecimenShortDescription (0040,0600) LO 1
#[rustfmt::skip]
pub const SPECIMEN_SHORT_DESCRIPTION: Tag = Tag(0x0040, 0x0600);
/// SpecimenDetailedDescription (0040,0602) UT 1
#[rustfmt::skip]
pub const SPECIMEN_DETAILED_DESCRIPTION: Tag = Tag(0x0040, 0x0602);
/// SpecimenPreparationSequence (0040,0610) SQ 1
#[rustfmt::skip]
pub const SPECIMEN_PREPARATION_SEQUENCE: Tag = Tag(0x0040, 0x0610);
/// SpecimenPreparationStepContentItemSequence (0040,0612) SQ 1
#[rustfmt::skip]
pub const SPECIMEN_PREPARATION_STEP_CONTENT_ITEM_SEQUENCE: Tag = Tag(0x0040, 0x0612);
/// SpecimenLocalizationContentItemSequence (0040,0620) SQ 1
#[rustfmt::skip]
pub const SPECIMEN_LOCALIZATION_CONTENT_ITEM_SEQUENCE: Tag = Tag(0x0040, 0x0620);
/// SlideIdentifier (0040,06FA) LO 1
#[rustfmt::skip]
pub const SLIDE_IDENTIFIER: Tag = Tag(0x0040, 0x06FA);
/// WholeSlideMicroscopyImageFrameTypeSequence (0040,0710) SQ 1
#[rustfmt::skip]
pub const WHOLE_SLIDE_MICROSCOPY_IMAGE_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0040, 0x0710);
/// ImageCenterPointCoordinatesSequence (0040,071A) SQ 1
#[rustfmt::skip]
pub const IMAGE_CENTER_POINT_COORDINATES_SEQUENCE: Tag = Tag(0x0040, 0x071A);
/// XOffsetInSlideCoordinateSystem (0040,072A) DS 1
#[rustfmt::skip]
pub const X_OFFSET_IN_SLIDE_COORDINATE_SYSTEM: Tag = Tag(0x0040, 0x072A);
/// YOffsetInSlideCoordinateSystem (0040,073A) DS 1
#[rustfmt::skip]
pub const Y_OFFSET_IN_SLIDE_COORDINATE_SYSTEM: Tag = Tag(0x0040, 0x073A);
/// ZOffsetInSlideCoordinateSystem (0040,074A) DS 1
#[rustfmt::skip]
pub const Z_OFFSET_IN_SLIDE_COORDINATE_SYSTEM: Tag = Tag(0x0040, 0x074A);
/// PixelSpacingSequence (0040,08D8) SQ 1
#[rustfmt::skip]
pub const PIXEL_SPACING_SEQUENCE: Tag = Tag(0x0040, 0x08D8);
/// CoordinateSystemAxisCodeSequence (0040,08DA) SQ 1
#[rustfmt::skip]
pub const COORDINATE_SYSTEM_AXIS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x08DA);
/// MeasurementUnitsCodeSequence (0040,08EA) SQ 1
#[rustfmt::skip]
pub const MEASUREMENT_UNITS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x08EA);
/// RequestedProcedureID (0040,1001) SH 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_ID: Tag = Tag(0x0040, 0x1001);
/// ReasonForTheRequestedProcedure (0040,1002) LO 1
#[rustfmt::skip]
pub const REASON_FOR_THE_REQUESTED_PROCEDURE: Tag = Tag(0x0040, 0x1002);
/// RequestedProcedurePriority (0040,1003) SH 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_PRIORITY: Tag = Tag(0x0040, 0x1003);
/// PatientTransportArrangements (0040,1004) LO 1
#[rustfmt::skip]
pub const PATIENT_TRANSPORT_ARRANGEMENTS: Tag = Tag(0x0040, 0x1004);
/// RequestedProcedureLocation (0040,1005) LO 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_LOCATION: Tag = Tag(0x0040, 0x1005);
/// PlacerOrderNumberProcedure (0040,1006) SH 1
#[rustfmt::skip]
pub const PLACER_ORDER_NUMBER_PROCEDURE: Tag = Tag(0x0040, 0x1006);
/// FillerOrderNumberProcedure (0040,1007) SH 1
#[rustfmt::skip]
pub const FILLER_ORDER_NUMBER_PROCEDURE: Tag = Tag(0x0040, 0x1007);
/// ConfidentialityCode (0040,1008) LO 1
#[rustfmt::skip]
pub const CONFIDENTIALITY_CODE: Tag = Tag(0x0040, 0x1008);
/// ReportingPriority (0040,1009) SH 1
#[rustfmt::skip]
pub const REPORTING_PRIORITY: Tag = Tag(0x0040, 0x1009);
/// ReasonForRequestedProcedureCodeSequence (0040,100A) SQ 1
#[rustfmt::skip]
pub const REASON_FOR_REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x100A);
/// NamesOfIntendedRecipientsOfResults (0040,1010) PN 1-n
#[rustfmt::skip]
pub const NAMES_OF_INTENDED_RECIPIENTS_OF_RESULTS: Tag = Tag(0x0040, 0x1010);
/// IntendedRecipientsOfResultsIdentificationSequence (0040,1011) SQ 1
#[rustfmt::skip]
pub const INTENDED_RECIPIENTS_OF_RESULTS_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0040, 0x1011);
/// ReasonForPerformedProcedureCodeSequence (0040,1012) SQ 1
#[rustfmt::skip]
pub const REASON_FOR_PERFORMED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x1012);
/// RequestedProcedureDescriptionTrial (0040,1060) LO 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION_TRIAL: Tag = Tag(0x0040, 0x1060);
/// PersonIdentificationCodeSequence (0040,1101) SQ 1
#[rustfmt::skip]
pub const PERSON_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0x1101);
/// PersonAddress (0040,1102) ST 1
#[rustfmt::skip]
pub const PERSON_ADDRESS: Tag = Tag(0x0040, 0x1102);
/// PersonTelephoneNumbers (0040,1103) LO 1-n
#[rustfmt::skip]
pub const PERSON_TELEPHONE_NUMBERS: Tag = Tag(0x0040, 0x1103);
/// PersonTelecomInformation (0040,1104) LT 1
#[rustfmt::skip]
pub const PERSON_TELECOM_INFORMATION: Tag = Tag(0x0040, 0x1104);
/// RequestedProcedureComments (0040,1400) LT 1
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_COMMENTS: Tag = Tag(0x0040, 0x1400);
/// ReasonForTheImagingServiceRequest (0040,2001) LO 1
#[rustfmt::skip]
pub const REASON_FOR_THE_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2001);
/// IssueDateOfImagingServiceRequest (0040,2004) DA 1
#[rustfmt::skip]
pub const ISSUE_DATE_OF_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2004);
/// IssueTimeOfImagingServiceRequest (0040,2005) TM 1
#[rustfmt::skip]
pub const ISSUE_TIME_OF_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2005);
/// PlacerOrderNumberImagingServiceRequestRetired (0040,2006) SH 1
#[rustfmt::skip]
pub const PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST_RETIRED: Tag = Tag(0x0040, 0x2006);
/// FillerOrderNumberImagingServiceRequestRetired (0040,2007) SH 1
#[rustfmt::skip]
pub const FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST_RETIRED: Tag = Tag(0x0040, 0x2007);
/// OrderEnteredBy (0040,2008) PN 1
#[rustfmt::skip]
pub const ORDER_ENTERED_BY: Tag = Tag(0x0040, 0x2008);
/// OrderEntererLocation (0040,2009) SH 1
#[rustfmt::skip]
pub const ORDER_ENTERER_LOCATION: Tag = Tag(0x0040, 0x2009);
/// OrderCallbackPhoneNumber (0040,2010) SH 1
#[rustfmt::skip]
pub const ORDER_CALLBACK_PHONE_NUMBER: Tag = Tag(0x0040, 0x2010);
/// OrderCallbackTelecomInformation (0040,2011) LT 1
#[rustfmt::skip]
pub const ORDER_CALLBACK_TELECOM_INFORMATION: Tag = Tag(0x0040, 0x2011);
/// PlacerOrderNumberImagingServiceRequest (0040,2016) LO 1
#[rustfmt::skip]
pub const PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2016);
/// FillerOrderNumberImagingServiceRequest (0040,2017) LO 1
#[rustfmt::skip]
pub const FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2017);
/// ImagingServiceRequestComments (0040,2400) LT 1
#[rustfmt::skip]
pub const IMAGING_SERVICE_REQUEST_COMMENTS: Tag = Tag(0x0040, 0x2400);
/// ConfidentialityConstraintOnPatientDataDescription (0040,3001) LO 1
#[rustfmt::skip]
pub const CONFIDENTIALITY_CONSTRAINT_ON_PATIENT_DATA_DESCRIPTION: Tag = Tag(0x0040, 0x3001);
/// EntranceDoseInmGy (0040,8302) DS 1
#[rustfmt::skip]
pub const ENTRANCE_DOSE_INM_GY: Tag = Tag(0x0040, 0x8302);
/// EntranceDoseDerivation (0040,8303) CS 1
#[rustfmt::skip]
pub const ENTRANCE_DOSE_DERIVATION: Tag = Tag(0x0040, 0x8303);
/// ParametricMapFrameTypeSequence (0040,9092) SQ 1
#[rustfmt::skip]
pub const PARAMETRIC_MAP_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0040, 0x9092);
/// ReferencedImageRealWorldValueMappingSequence (0040,9094) SQ 1
#[rustfmt::skip]
pub const REFERENCED_IMAGE_REAL_WORLD_VALUE_MAPPING_SEQUENCE: Tag = Tag(0x0040, 0x9094);
/// RealWorldValueMappingSequence (0040,9096) SQ 1
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_MAPPING_SEQUENCE: Tag = Tag(0x0040, 0x9096);
/// PixelValueMappingCodeSequence (0040,9098) SQ 1
#[rustfmt::skip]
pub const PIXEL_VALUE_MAPPING_CODE_SEQUENCE: Tag = Tag(0x0040, 0x9098);
/// LUTLabel (0040,9210) SH 1
#[rustfmt::skip]
pub const LUT_LABEL: Tag = Tag(0x0040, 0x9210);
/// RealWorldValueLastValueMapped (0040,9211) US or SS 1
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_LAST_VALUE_MAPPED: Tag = Tag(0x0040, 0x9211);
/// RealWorldValueLUTData (0040,9212) FD 1-n
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_LUT_DATA: Tag = Tag(0x0040, 0x9212);
/// DoubleFloatRealWorldValueLastValueMapped (0040,9213) FD 1
#[rustfmt::skip]
pub const DOUBLE_FLOAT_REAL_WORLD_VALUE_LAST_VALUE_MAPPED: Tag = Tag(0x0040, 0x9213);
/// DoubleFloatRealWorldValueFirstValueMapped (0040,9214) FD 1
#[rustfmt::skip]
pub const DOUBLE_FLOAT_REAL_WORLD_VALUE_FIRST_VALUE_MAPPED: Tag = Tag(0x0040, 0x9214);
/// RealWorldValueFirstValueMapped (0040,9216) US or SS 1
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_FIRST_VALUE_MAPPED: Tag = Tag(0x0040, 0x9216);
/// QuantityDefinitionSequence (0040,9220) SQ 1
#[rustfmt::skip]
pub const QUANTITY_DEFINITION_SEQUENCE: Tag = Tag(0x0040, 0x9220);
/// RealWorldValueIntercept (0040,9224) FD 1
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_INTERCEPT: Tag = Tag(0x0040, 0x9224);
/// RealWorldValueSlope (0040,9225) FD 1
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_SLOPE: Tag = Tag(0x0040, 0x9225);
/// FindingsFlagTrial (0040,A007) CS 1
#[rustfmt::skip]
pub const FINDINGS_FLAG_TRIAL: Tag = Tag(0x0040, 0xA007);
/// RelationshipType (0040,A010) CS 1
#[rustfmt::skip]
pub const RELATIONSHIP_TYPE: Tag = Tag(0x0040, 0xA010);
/// VerifyingOrganization (0040,A027) LO 1
#[rustfmt::skip]
pub const VERIFYING_ORGANIZATION: Tag = Tag(0x0040, 0xA027);
/// VerificationDateTime (0040,A030) DT 1
#[rustfmt::skip]
pub const VERIFICATION_DATE_TIME: Tag = Tag(0x0040, 0xA030);
/// ObservationDateTime (0040,A032) DT 1
#[rustfmt::skip]
pub const OBSERVATION_DATE_TIME: Tag = Tag(0x0040, 0xA032);
/// ObservationStartDateTime (0040,A033) DT 1
#[rustfmt::skip]
pub const OBSERVATION_START_DATE_TIME: Tag = Tag(0x0040, 0xA033);
/// ValueType (0040,A040) CS 1
#[rustfmt::skip]
pub const VALUE_TYPE: Tag = Tag(0x0040, 0xA040);
/// ConceptNameCodeSequence (0040,A043) SQ 1
#[rustfmt::skip]
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);
/// ContinuityOfContent (0040,A050) CS 1
#[rustfmt::skip]
pub const CONTINUITY_OF_CONTENT: Tag = Tag(0x0040, 0xA050);
/// VerifyingObserverSequence (0040,A073) SQ 1
#[rustfmt::skip]
pub const VERIFYING_OBSERVER_SEQUENCE: Tag = Tag(0x0040, 0xA073);
/// VerifyingObserverName (0040,A075) PN 1
#[rustfmt::skip]
pub const VERIFYING_OBSERVER_NAME: Tag = Tag(0x0040, 0xA075);
/// AuthorObserverSequence (0040,A078) SQ 1
#[rustfmt::skip]
pub const AUTHOR_OBSERVER_SEQUENCE: Tag = Tag(0x0040, 0xA078);
/// ParticipantSequence (0040,A07A) SQ 1
#[rustfmt::skip]
pub const PARTICIPANT_SEQUENCE: Tag = Tag(0x0040, 0xA07A);
/// CustodialOrganizationSequence (0040,A07C) SQ 1
#[rustfmt::skip]
pub const CUSTODIAL_ORGANIZATION_SEQUENCE: Tag = Tag(0x0040, 0xA07C);
/// ParticipationType (0040,A080) CS 1
#[rustfmt::skip]
pub const PARTICIPATION_TYPE: Tag = Tag(0x0040, 0xA080);
/// ParticipationDateTime (0040,A082) DT 1
#[rustfmt::skip]
pub const PARTICIPATION_DATE_TIME: Tag = Tag(0x0040, 0xA082);
/// ObserverType (0040,A084) CS 1
#[rustfmt::skip]
pub const OBSERVER_TYPE: Tag = Tag(0x0040, 0xA084);
/// VerifyingObserverIdentificationCodeSequence (0040,A088) SQ 1
#[rustfmt::skip]
pub const VERIFYING_OBSERVER_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA088);
/// ReferencedWaveformChannels (0040,A0B0) US 2-2n
#[rustfmt::skip]
pub const REFERENCED_WAVEFORM_CHANNELS: Tag = Tag(0x0040, 0xA0B0);
/// DateTime (0040,A120) DT 1
#[rustfmt::skip]
pub const DATE_TIME: Tag = Tag(0x0040, 0xA120);
/// Date (0040,A121) DA 1
#[rustfmt::skip]
pub const DATE: Tag = Tag(0x0040, 0xA121);
/// Time (0040,A122) TM 1
#[rustfmt::skip]
pub const TIME: Tag = Tag(0x0040, 0xA122);
/// PersonName (0040,A123) PN 1
#[rustfmt::skip]
pub const PERSON_NAME: Tag = Tag(0x0040, 0xA123);
/// UID (0040,A124) UI 1
#[rustfmt::skip]
pub const UID: Tag = Tag(0x0040, 0xA124);
/// TemporalRangeType (0040,A130) CS 1
#[rustfmt::skip]
pub const TEMPORAL_RANGE_TYPE: Tag = Tag(0x0040, 0xA130);
/// ReferencedSamplePositions (0040,A132) UL 1-n
#[rustfmt::skip]
pub const REFERENCED_SAMPLE_POSITIONS: Tag = Tag(0x0040, 0xA132);
/// ReferencedFrameNumbers (0040,A136) US 1-n
#[rustfmt::skip]
pub const REFERENCED_FRAME_NUMBERS: Tag = Tag(0x0040, 0xA136);
/// ReferencedTimeOffsets (0040,A138) DS 1-n
#[rustfmt::skip]
pub const REFERENCED_TIME_OFFSETS: Tag = Tag(0x0040, 0xA138);
/// ReferencedDateTime (0040,A13A) DT 1-n
#[rustfmt::skip]
pub const REFERENCED_DATE_TIME: Tag = Tag(0x0040, 0xA13A);
/// TextValue (0040,A160) UT 1
#[rustfmt::skip]
pub const TEXT_VALUE: Tag = Tag(0x0040, 0xA160);
/// FloatingPointValue (0040,A161) FD 1-n
#[rustfmt::skip]
pub const FLOATING_POINT_VALUE: Tag = Tag(0x0040, 0xA161);
/// RationalNumeratorValue (0040,A162) SL 1-n
#[rustfmt::skip]
pub const RATIONAL_NUMERATOR_VALUE: Tag = Tag(0x0040, 0xA162);
/// RationalDenominatorValue (0040,A163) UL 1-n
#[rustfmt::skip]
pub const RATIONAL_DENOMINATOR_VALUE: Tag = Tag(0x0040, 0xA163);
/// ConceptCodeSequence (0040,A168) SQ 1
#[rustfmt::skip]
pub const CONCEPT_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA168);
/// PurposeOfReferenceCodeSequence (0040,A170) SQ 1
#[rustfmt::skip]
pub const PURPOSE_OF_REFERENCE_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA170);
/// AnnotationGroupNumber (0040,A180) US 1
#[rustfmt::skip]
pub const ANNOTATION_GROUP_NUMBER: Tag = Tag(0x0040, 0xA180);
/// ModifierCodeSequence (0040,A195) SQ 1
#[rustfmt::skip]
pub const MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA195);
/// MeasuredValueSequence (0040,A300) SQ 1
#[rustfmt::skip]
pub const MEASURED_VALUE_SEQUENCE: Tag = Tag(0x0040, 0xA300);
/// NumericValueQualifierCodeSequence (0040,A301) SQ 1
#[rustfmt::skip]
pub const NUMERIC_VALUE_QUALIFIER_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA301);
/// NumericValue (0040,A30A) DS 1-n
#[rustfmt::skip]
pub const NUMERIC_VALUE: Tag = Tag(0x0040, 0xA30A);
/// PredecessorDocumentsSequence (0040,A360) SQ 1
#[rustfmt::skip]
pub const PREDECESSOR_DOCUMENTS_SEQUENCE: Tag = Tag(0x0040, 0xA360);
/// ReferencedRequestSequence (0040,A370) SQ 1
#[rustfmt::skip]
pub const REFERENCED_REQUEST_SEQUENCE: Tag = Tag(0x0040, 0xA370);
/// PerformedProcedureCodeSequence (0040,A372) SQ 1
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA372);
/// CurrentRequestedProcedureEvidenceSequence (0040,A375) SQ 1
#[rustfmt::skip]
pub const CURRENT_REQUESTED_PROCEDURE_EVIDENCE_SEQUENCE: Tag = Tag(0x0040, 0xA375);
/// PertinentOtherEvidenceSequence (0040,A385) SQ 1
#[rustfmt::skip]
pub const PERTINENT_OTHER_EVIDENCE_SEQUENCE: Tag = Tag(0x0040, 0xA385);
/// HL7StructuredDocumentReferenceSequence (0040,A390) SQ 1
#[rustfmt::skip]
pub const HL7_STRUCTURED_DOCUMENT_REFERENCE_SEQUENCE: Tag = Tag(0x0040, 0xA390);
/// CompletionFlag (0040,A491) CS 1
#[rustfmt::skip]
pub const COMPLETION_FLAG: Tag = Tag(0x0040, 0xA491);
/// CompletionFlagDescription (0040,A492) LO 1
#[rustfmt::skip]
pub const COMPLETION_FLAG_DESCRIPTION: Tag = Tag(0x0040, 0xA492);
/// VerificationFlag (0040,A493) CS 1
#[rustfmt::skip]
pub const VERIFICATION_FLAG: Tag = Tag(0x0040, 0xA493);
/// ArchiveRequested (0040,A494) CS 1
#[rustfmt::skip]
pub const ARCHIVE_REQUESTED: Tag = Tag(0x0040, 0xA494);
/// PreliminaryFlag (0040,A496) CS 1
#[rustfmt::skip]
pub const PRELIMINARY_FLAG: Tag = Tag(0x0040, 0xA496);
/// ContentTemplateSequence (0040,A504) SQ 1
#[rustfmt::skip]
pub const CONTENT_TEMPLATE_SEQUENCE: Tag = Tag(0x0040, 0xA504);
/// IdenticalDocumentsSequence (0040,A525) SQ 1
#[rustfmt::skip]
pub const IDENTICAL_DOCUMENTS_SEQUENCE: Tag = Tag(0x0040, 0xA525);
/// ContentSequence (0040,A730) SQ 1
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// WaveformAnnotationSequence (0040,B020) SQ 1
#[rustfmt::skip]
pub const WAVEFORM_ANNOTATION_SEQUENCE: Tag = Tag(0x0040, 0xB020);
/// TemplateIdentifier (0040,DB00) CS 1
#[rustfmt::skip]
pub const TEMPLATE_IDENTIFIER: Tag = Tag(0x0040, 0xDB00);
/// ReferencedContentItemIdentifier (0040,DB73) UL 1-n
#[rustfmt::skip]
pub const REFERENCED_CONTENT_ITEM_IDENTIFIER: Tag = Tag(0x0040, 0xDB73);
/// HL7InstanceIdentifier (0040,E001) ST 1
#[rustfmt::skip]
pub const HL7_INSTANCE_IDENTIFIER: Tag = Tag(0x0040, 0xE001);
/// HL7DocumentEffectiveTime (0040,E004) DT 1
#[rustfmt::skip]
pub const HL7_DOCUMENT_EFFECTIVE_TIME: Tag = Tag(0x0040, 0xE004);
/// HL7DocumentTypeCodeSequence (0040,E006) SQ 1
#[rustfmt::skip]
pub const HL7_DOCUMENT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0040, 0xE006);
/// DocumentClassCodeSequence (0040,E008) SQ 1
#[rustfmt::skip]
pub const DOCUMENT_CLASS_CODE_SEQUENCE: Tag = Tag(0x0040, 0xE008);
/// RetrieveURI (0040,E010) UR 1
#[rustfmt::skip]
pub const RETRIEVE_URI: Tag = Tag(0x0040, 0xE010);
/// RetrieveLocationUID (0040,E011) UI 1
#[rustfmt::skip]
pub const RETRIEVE_LOCATION_UID: Tag = Tag(0x0040, 0xE011);
/// TypeOfInstances (0040,E020) CS 1
#[rustfmt::skip]
pub const TYPE_OF_INSTANCES: Tag = Tag(0x0040, 0xE020);
/// DICOMRetrievalSequence (0040,E021) SQ 1
#[rustfmt::skip]
pub const DICOM_RETRIEVAL_SEQUENCE: Tag = Tag(0x0040, 0xE021);
/// DICOMMediaRetrievalSequence (0040,E022) SQ 1
#[rustfmt::skip]
pub const DICOM_MEDIA_RETRIEVAL_SEQUENCE: Tag = Tag(0x0040, 0xE022);
/// WADORetrievalSequence (0040,E023) SQ 1
#[rustfmt::skip]
pub const WADO_RETRIEVAL_SEQUENCE: Tag = Tag(0x0040, 0xE023);
/// XDSRetrievalSequence (0040,E024) SQ 1
#[rustfmt::skip]
pub const XDS_RETRIEVAL_SEQUENCE: Tag = Tag(0x0040, 0xE024);
/// WADORSRetrievalSequence (0040,E025) SQ 1
#[rustfmt::skip]
pub const WADORS_RETRIEVAL_SEQUENCE: Tag = Tag(0x0040, 0xE025);
/// RepositoryUniqueID (0040,E030) UI 1
#[rustfmt::skip]
pub const REPOSITORY_UNIQUE_ID: Tag = Tag(0x0040, 0xE030);
/// HomeCommunityID (0040,E031) UI 1
#[rustfmt::skip]
pub const HOME_COMMUNITY_ID: Tag = Tag(0x0040, 0xE031);
/// EnergyWindowVector (0054,0010) US 1-n
#[rustfmt::skip]
pub const ENERGY_WINDOW_VECTOR: Tag = Tag(0x0054, 0x0010);
/// NumberOfEnergyWindows (0054,0011) US 1
#[rustfmt::skip]
pub const NUMBER_OF_ENERGY_WINDOWS: Tag = Tag(0x0054, 0x0011);
/// EnergyWindowInformationSequence (0054,0012) SQ 1
#[rustfmt::skip]
pub const ENERGY_WINDOW_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0012);
/// EnergyWindowRangeSequence (0054,0013) SQ 1
#[rustfmt::skip]
pub const ENERGY_WINDOW_RANGE_SEQUENCE: Tag = Tag(0x0054, 0x0013);
/// EnergyWindowLowerLimit (0054,0014) DS 1
#[rustfmt::skip]
pub const ENERGY_WINDOW_LOWER_LIMIT: Tag = Tag(0x0054, 0x0014);
/// EnergyWindowUpperLimit (0054,0015) DS 1
#[rustfmt::skip]
pub const ENERGY_WINDOW_UPPER_LIMIT: Tag = Tag(0x0054, 0x0015);
/// RadiopharmaceuticalInformationSequence (0054,0016) SQ 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0016);
/// ResidualSyringeCounts (0054,0017) IS 1
#[rustfmt::skip]
pub const RESIDUAL_SYRINGE_COUNTS: Tag = Tag(0x0054, 0x0017);
/// EnergyWindowName (0054,0018) SH 1
#[rustfmt::skip]
pub const ENERGY_WINDOW_NAME: Tag = Tag(0x0054, 0x0018);
/// DetectorVector (0054,0020) US 1-n
#[rustfmt::skip]
pub const DETECTOR_VECTOR: Tag = Tag(0x0054, 0x0020);
/// NumberOfDetectors (0054,0021) US 1
#[rustfmt::skip]
pub const NUMBER_OF_DETECTORS: Tag = Tag(0x0054, 0x0021);
/// DetectorInformationSequence (0054,0022) SQ 1
#[rustfmt::skip]
pub const DETECTOR_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0022);
/// PhaseVector (0054,0030) US 1-n
#[rustfmt::skip]
pub const PHASE_VECTOR: Tag = Tag(0x0054, 0x0030);
/// NumberOfPhases (0054,0031) US 1
#[rustfmt::skip]
pub const NUMBER_OF_PHASES: Tag = Tag(0x0054, 0x0031);
/// PhaseInformationSequence (0054,0032) SQ 1
#[rustfmt::skip]
pub const PHASE_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0032);
/// NumberOfFramesInPhase (0054,0033) US 1
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES_IN_PHASE: Tag = Tag(0x0054, 0x0033);
/// PhaseDelay (0054,0036) IS 1
#[rustfmt::skip]
pub const PHASE_DELAY: Tag = Tag(0x0054, 0x0036);
/// PauseBetweenFrames (0054,0038) IS 1
#[rustfmt::skip]
pub const PAUSE_BETWEEN_FRAMES: Tag = Tag(0x0054, 0x0038);
/// PhaseDescription (0054,0039) CS 1
#[rustfmt::skip]
pub const PHASE_DESCRIPTION: Tag = Tag(0x0054, 0x0039);
/// RotationVector (0054,0050) US 1-n
#[rustfmt::skip]
pub const ROTATION_VECTOR: Tag = Tag(0x0054, 0x0050);
/// NumberOfRotations (0054,0051) US 1
#[rustfmt::skip]
pub const NUMBER_OF_ROTATIONS: Tag = Tag(0x0054, 0x0051);
/// RotationInformationSequence (0054,0052) SQ 1
#[rustfmt::skip]
pub const ROTATION_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0052);
/// NumberOfFramesInRotation (0054,0053) US 1
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES_IN_ROTATION: Tag = Tag(0x0054, 0x0053);
/// RRIntervalVector (0054,0060) US 1-n
#[rustfmt::skip]
pub const RR_INTERVAL_VECTOR: Tag = Tag(0x0054, 0x0060);
/// NumberOfRRIntervals (0054,0061) US 1
#[rustfmt::skip]
pub const NUMBER_OF_RR_INTERVALS: Tag = Tag(0x0054, 0x0061);
/// GatedInformationSequence (0054,0062) SQ 1
#[rustfmt::skip]
pub const GATED_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0062);
/// DataInformationSequence (0054,0063) SQ 1
#[rustfmt::skip]
pub const DATA_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0063);
/// TimeSlotVector (0054,0070) US 1-n
#[rustfmt::skip]
pub const TIME_SLOT_VECTOR: Tag = Tag(0x0054, 0x0070);
/// NumberOfTimeSlots (0054,0071) US 1
#[rustfmt::skip]
pub const NUMBER_OF_TIME_SLOTS: Tag = Tag(0x0054, 0x0071);
/// TimeSlotInformationSequence (0054,0072) SQ 1
#[rustfmt::skip]
pub const TIME_SLOT_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0072);
/// TimeSlotTime (0054,0073) DS 1
#[rustfmt::skip]
pub const TIME_SLOT_TIME: Tag = Tag(0x0054, 0x0073);
/// SliceVector (0054,0080) US 1-n
#[rustfmt::skip]
pub const SLICE_VECTOR: Tag = Tag(0x0054, 0x0080);
/// NumberOfSlices (0054,0081) US 1
#[rustfmt::skip]
pub const NUMBER_OF_SLICES: Tag = Tag(0x0054, 0x0081);
/// AngularViewVector (0054,0090) US 1-n
#[rustfmt::skip]
pub const ANGULAR_VIEW_VECTOR: Tag = Tag(0x0054, 0x0090);
/// TimeSliceVector (0054,0100) US 1-n
#[rustfmt::skip]
pub const TIME_SLICE_VECTOR: Tag = Tag(0x0054, 0x0100);
/// NumberOfTimeSlices (0054,0101) US 1
#[rustfmt::skip]
pub const NUMBER_OF_TIME_SLICES: Tag = Tag(0x0054, 0x0101);
/// StartAngle (0054,0200) DS 1
#[rustfmt::skip]
pub const START_ANGLE: Tag = Tag(0x0054, 0x0200);
/// TypeOfDetectorMotion (0054,0202) CS 1
#[rustfmt::skip]
pub const TYPE_OF_DETECTOR_MOTION: Tag = Tag(0x0054, 0x0202);
/// TriggerVector (0054,0210) IS 1-n
#[rustfmt::skip]
pub const TRIGGER_VECTOR: Tag = Tag(0x0054, 0x0210);
/// NumberOfTriggersInPhase (0054,0211) US 1
#[rustfmt::skip]
pub const NUMBER_OF_TRIGGERS_IN_PHASE: Tag = Tag(0x0054, 0x0211);
/// ViewCodeSequence (0054,0220) SQ 1
#[rustfmt::skip]
pub const VIEW_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0220);
/// ViewModifierCodeSequence (0054,0222) SQ 1
#[rustfmt::skip]
pub const VIEW_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0222);
/// RadionuclideCodeSequence (0054,0300) SQ 1
#[rustfmt::skip]
pub const RADIONUCLIDE_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0300);
/// AdministrationRouteCodeSequence (0054,0302) SQ 1
#[rustfmt::skip]
pub const ADMINISTRATION_ROUTE_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0302);
/// RadiopharmaceuticalCodeSequence (0054,0304) SQ 1
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0304);
/// CalibrationDataSequence (0054,0306) SQ 1
#[rustfmt::skip]
pub const CALIBRATION_DATA_SEQUENCE: Tag = Tag(0x0054, 0x0306);
/// EnergyWindowNumber (0054,0308) US 1
#[rustfmt::skip]
pub const ENERGY_WINDOW_NUMBER: Tag = Tag(0x0054, 0x0308);
/// ImageID (0054,0400) SH 1
#[rustfmt::skip]
pub const IMAGE_ID: Tag = Tag(0x0054, 0x0400);
/// PatientOrientationCodeSequence (0054,0410) SQ 1
#[rustfmt::skip]
pub const PATIENT_ORIENTATION_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0410);
/// PatientOrientationModifierCodeSequence (0054,0412) SQ 1
#[rustfmt::skip]
pub const PATIENT_ORIENTATION_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0412);
/// PatientGantryRelationshipCodeSequence (0054,0414) SQ 1
#[rustfmt::skip]
pub const PATIENT_GANTRY_RELATIONSHIP_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0414);
/// SliceProgressionDirection (0054,0500) CS 1
#[rustfmt::skip]
pub const SLICE_PROGRESSION_DIRECTION: Tag = Tag(0x0054, 0x0500);
/// ScanProgressionDirection (0054,0501) CS 1
#[rustfmt::skip]
pub const SCAN_PROGRESSION_DIRECTION: Tag = Tag(0x0054, 0x0501);
/// SeriesType (0054,1000) CS 2
#[rustfmt::skip]
pub const SERIES_TYPE: Tag = Tag(0x0054, 0x1000);
/// Units (0054,1001) CS 1
#[rustfmt::skip]
pub const UNITS: Tag = Tag(0x0054, 0x1001);
/// CountsSource (0054,1002) CS 1
#[rustfmt::skip]
pub const COUNTS_SOURCE: Tag = Tag(0x0054, 0x1002);
/// ReprojectionMethod (0054,1004) CS 1
#[rustfmt::skip]
pub const REPROJECTION_METHOD: Tag = Tag(0x0054, 0x1004);
/// SUVType (0054,1006) CS 1
#[rustfmt::skip]
pub const SUV_TYPE: Tag = Tag(0x0054, 0x1006);
/// RandomsCorrectionMethod (0054,1100) CS 1
#[rustfmt::skip]
pub const RANDOMS_CORRECTION_METHOD: Tag = Tag(0x0054, 0x1100);
/// AttenuationCorrectionMethod (0054,1101) LO 1
#[rustfmt::skip]
pub const ATTENUATION_CORRECTION_METHOD: Tag = Tag(0x0054, 0x1101);
/// DecayCorrection (0054,1102) CS 1
#[rustfmt::skip]
pub const DECAY_CORRECTION: Tag = Tag(0x0054, 0x1102);
/// ReconstructionMethod (0054,1103) LO 1
#[rustfmt::skip]
pub const RECONSTRUCTION_METHOD: Tag = Tag(0x0054, 0x1103);
/// DetectorLinesOfResponseUsed (0054,1104) LO 1
#[rustfmt::skip]
pub const DETECTOR_LINES_OF_RESPONSE_USED: Tag = Tag(0x0054, 0x1104);
/// ScatterCorrectionMethod (0054,1105) LO 1
#[rustfmt::skip]
pub const SCATTER_CORRECTION_METHOD: Tag = Tag(0x0054, 0x1105);
/// AxialAcceptance (0054,1200) DS 1
#[rustfmt::skip]
pub const AXIAL_ACCEPTANCE: Tag = Tag(0x0054, 0x1200);
/// AxialMash (0054,1201) IS 2
#[rustfmt::skip]
pub const AXIAL_MASH: Tag = Tag(0x0054, 0x1201);
/// TransverseMash (0054,1202) IS 1
#[rustfmt::skip]
pub const TRANSVERSE_MASH: Tag = Tag(0x0054, 0x1202);
/// DetectorElementSize (0054,1203) DS 2
#[rustfmt::skip]
pub const DETECTOR_ELEMENT_SIZE: Tag = Tag(0x0054, 0x1203);
/// CoincidenceWindowWidth (0054,1210) DS 1
#[rustfmt::skip]
pub const COINCIDENCE_WINDOW_WIDTH: Tag = Tag(0x0054, 0x1210);
/// SecondaryCountsType (0054,1220) CS 1-n
#[rustfmt::skip]
pub const SECONDARY_COUNTS_TYPE: Tag = Tag(0x0054, 0x1220);
/// FrameReferenceTime (0054,1300) DS 1
#[rustfmt::skip]
pub const FRAME_REFERENCE_TIME: Tag = Tag(0x0054, 0x1300);
/// PrimaryPromptsCountsAccumulated (0054,1310) IS 1
#[rustfmt::skip]
pub const PRIMARY_PROMPTS_COUNTS_ACCUMULATED: Tag = Tag(0x0054, 0x1310);
/// SecondaryCountsAccumulated (0054,1311) IS 1-n
#[rustfmt::skip]
pub const SECONDARY_COUNTS_ACCUMULATED: Tag = Tag(0x0054, 0x1311);
/// SliceSensitivityFactor (0054,1320) DS 1
#[rustfmt::skip]
pub const SLICE_SENSITIVITY_FACTOR: Tag = Tag(0x0054, 0x1320);
/// DecayFactor (0054,1321) DS 1
#[rustfmt::skip]
pub const DECAY_FACTOR: Tag = Tag(0x0054, 0x1321);
/// DoseCalibrationFactor (0054,1322) DS 1
#[rustfmt::skip]
pub const DOSE_CALIBRATION_FACTOR: Tag = Tag(0x0054, 0x1322);
/// ScatterFractionFactor (0054,1323) DS 1
#[rustfmt::skip]
pub const SCATTER_FRACTION_FACTOR: Tag = Tag(0x0054, 0x1323);
/// DeadTimeFactor (0054,1324) DS 1
#[rustfmt::skip]
pub const DEAD_TIME_FACTOR: Tag = Tag(0x0054, 0x1324);
/// ImageIndex (0054,1330) US 1
#[rustfmt::skip]
pub const IMAGE_INDEX: Tag = Tag(0x0054, 0x1330);
/// CountsIncluded (0054,1400) CS 1-n
#[rustfmt::skip]
pub const COUNTS_INCLUDED: Tag = Tag(0x0054, 0x1400);
/// DeadTimeCorrectionFlag (0054,1401) CS 1
#[rustfmt::skip]
pub const DEAD_TIME_CORRECTION_FLAG: Tag = Tag(0x0054, 0x1401);
/// HistogramSequence (0060,3000) SQ 1
#[rustfmt::skip]
pub const HISTOGRAM_SEQUENCE: Tag = Tag(0x0060, 0x3000);
/// HistogramNumberOfBins (0060,3002) US 1
#[rustfmt::skip]
pub const HISTOGRAM_NUMBER_OF_BINS: Tag = Tag(0x0060, 0x3002);
/// HistogramFirstBinValue (0060,3004) US or SS 1
#[rustfmt::skip]
pub const HISTOGRAM_FIRST_BIN_VALUE: Tag = Tag(0x0060, 0x3004);
/// HistogramLastBinValue (0060,3006) US or SS 1
#[rustfmt::skip]
pub const HISTOGRAM_LAST_BIN_VALUE: Tag = Tag(0x0060, 0x3006);
/// HistogramBinWidth (0060,3008) US 1
#[rustfmt::skip]
pub const HISTOGRAM_BIN_WIDTH: Tag = Tag(0x0060, 0x3008);
/// HistogramExplanation (0060,3010) LO 1
#[rustfmt::skip]
pub const HISTOGRAM_EXPLANATION: Tag = Tag(0x0060, 0x3010);
/// HistogramData (0060,3020) UL 1-n
#[rustfmt::skip]
pub const HISTOGRAM_DATA: Tag = Tag(0x0060, 0x3020);
/// SegmentationType (0062,0001) CS 1
#[rustfmt::skip]
pub const SEGMENTATION_TYPE: Tag = Tag(0x0062, 0x0001);
/// SegmentSequence (0062,0002) SQ 1
#[rustfmt::skip]
pub const SEGMENT_SEQUENCE: Tag = Tag(0x0062, 0x0002);
/// SegmentedPropertyCategoryCodeSequence (0062,0003) SQ 1
#[rustfmt::skip]
pub const SEGMENTED_PROPERTY_CATEGORY_CODE_SEQUENCE: Tag = Tag(0x0062, 0x0003);
/// SegmentNumber (0062,0004) US 1
#[rustfmt::skip]
pub const SEGMENT_NUMBER: Tag = Tag(0x0062, 0x0004);
/// SegmentLabel (0062,0005) LO 1
#[rustfmt::skip]
pub const SEGMENT_LABEL: Tag = Tag(0x0062, 0x0005);
/// SegmentDescription (0062,0006) ST 1
#[rustfmt::skip]
pub const SEGMENT_DESCRIPTION: Tag = Tag(0x0062, 0x0006);
/// SegmentAlgorithmType (0062,0008) CS 1
#[rustfmt::skip]
pub const SEGMENT_ALGORITHM_TYPE: Tag = Tag(0x0062, 0x0008);
/// SegmentAlgorithmName (0062,0009) LO 1-n
#[rustfmt::skip]
pub const SEGMENT_ALGORITHM_NAME: Tag = Tag(0x0062, 0x0009);
/// SegmentIdentificationSequence (0062,000A) SQ 1
#[rustfmt::skip]
pub const SEGMENT_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0062, 0x000A);
/// ReferencedSegmentNumber (0062,000B) US 1-n
#[rustfmt::skip]
pub const REFERENCED_SEGMENT_NUMBER: Tag = Tag(0x0062, 0x000B);
/// RecommendedDisplayGrayscaleValue (0062,000C) US 1
#[rustfmt::skip]
pub const RECOMMENDED_DISPLAY_GRAYSCALE_VALUE: Tag = Tag(0x0062, 0x000C);
/// RecommendedDisplayCIELabValue (0062,000D) US 3
#[rustfmt::skip]
pub const RECOMMENDED_DISPLAY_CIE_LAB_VALUE: Tag = Tag(0x0062, 0x000D);
/// MaximumFractionalValue (0062,000E) US 1
#[rustfmt::skip]
pub const MAXIMUM_FRACTIONAL_VALUE: Tag = Tag(0x0062, 0x000E);
/// SegmentedPropertyTypeCodeSequence (0062,000F) SQ 1
#[rustfmt::skip]
pub const SEGMENTED_PROPERTY_TYPE_CODE_SEQUENCE: Tag = Tag(0x0062, 0x000F);
/// SegmentationFractionalType (0062,0010) CS 1
#[rustfmt::skip]
pub const SEGMENTATION_FRACTIONAL_TYPE: Tag = Tag(0x0062, 0x0010);
/// SegmentedPropertyTypeModifierCodeSequence (0062,0011) SQ 1
#[rustfmt::skip]
pub const SEGMENTED_PROPERTY_TYPE_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0062, 0x0011);
/// UsedSegmentsSequence (0062,0012) SQ 1
#[rustfmt::skip]
pub const USED_SEGMENTS_SEQUENCE: Tag = Tag(0x0062, 0x0012);
/// SegmentsOverlap (0062,0013) CS 1
#[rustfmt::skip]
pub const SEGMENTS_OVERLAP: Tag = Tag(0x0062, 0x0013);
/// TrackingID (0062,0020) UT 1
#[rustfmt::skip]
pub const TRACKING_ID: Tag = Tag(0x0062, 0x0020);
/// TrackingUID (0062,0021) UI 1
#[rustfmt::skip]
pub const TRACKING_UID: Tag = Tag(0x0062, 0x0021);
/// GraphicAnnotationSequence (0070,0001) SQ 1
#[rustfmt::skip]
pub const GRAPHIC_ANNOTATION_SEQUENCE: Tag = Tag(0x0070, 0x0001);
/// GraphicLayer (0070,0002) CS 1
#[rustfmt::skip]
pub const GRAPHIC_LAYER: Tag = Tag(0x0070, 0x0002);
/// BoundingBoxAnnotationUnits (0070,0003) CS 1
#[rustfmt::skip]
pub const BOUNDING_BOX_ANNOTATION_UNITS: Tag = Tag(0x0070, 0x0003);
/// AnchorPointAnnotationUnits (0070,0004) CS 1
#[rustfmt::skip]
pub const ANCHOR_POINT_ANNOTATION_UNITS: Tag = Tag(0x0070, 0x0004);
/// GraphicAnnotationUnits (0070,0005) CS 1
#[rustfmt::skip]
pub const GRAPHIC_ANNOTATION_UNITS: Tag = Tag(0x0070, 0x0005);
/// UnformattedTextValue (0070,0006) ST 1
#[rustfmt::skip]
pub const UNFORMATTED_TEXT_VALUE: Tag = Tag(0x0070, 0x0006);
/// TextObjectSequence (0070,0008) SQ 1
#[rustfmt::skip]
pub const TEXT_OBJECT_SEQUENCE: Tag = Tag(0x0070, 0x0008);
/// GraphicObjectSequence (0070,0009) SQ 1
#[rustfmt::skip]
pub const GRAPHIC_OBJECT_SEQUENCE: Tag = Tag(0x0070, 0x0009);
/// BoundingBoxTopLeftHandCorner (0070,0010) FL 2
#[rustfmt::skip]
pub const BOUNDING_BOX_TOP_LEFT_HAND_CORNER: Tag = Tag(0x0070, 0x0010);
/// BoundingBoxBottomRightHandCorner (0070,0011) FL 2
#[rustfmt::skip]
pub const BOUNDING_BOX_BOTTOM_RIGHT_HAND_CORNER: Tag = Tag(0x0070, 0x0011);
/// BoundingBoxTextHorizontalJustification (0070,0012) CS 1
#[rustfmt::skip]
pub const BOUNDING_BOX_TEXT_HORIZONTAL_JUSTIFICATION: Tag = Tag(0x0070, 0x0012);
/// AnchorPoint (0070,0014) FL 2
#[rustfmt::skip]
pub const ANCHOR_POINT: Tag = Tag(0x0070, 0x0014);
/// AnchorPointVisibility (0070,0015) CS 1
#[rustfmt::skip]
pub const ANCHOR_POINT_VISIBILITY: Tag = Tag(0x0070, 0x0015);
/// GraphicDimensions (0070,0020) US 1
#[rustfmt::skip]
pub const GRAPHIC_DIMENSIONS: Tag = Tag(0x0070, 0x0020);
/// NumberOfGraphicPoints (0070,0021) US 1
#[rustfmt::skip]
pub const NUMBER_OF_GRAPHIC_POINTS: Tag = Tag(0x0070, 0x0021);
/// GraphicData (0070,0022) FL 2-n
#[rustfmt::skip]
pub const GRAPHIC_DATA: Tag = Tag(0x0070, 0x0022);
/// GraphicType (0070,0023) CS 1
#[rustfmt::skip]
pub const GRAPHIC_TYPE: Tag = Tag(0x0070, 0x0023);
/// GraphicFilled (0070,0024) CS 1
#[rustfmt::skip]
pub const GRAPHIC_FILLED: Tag = Tag(0x0070, 0x0024);
/// ImageHorizontalFlip (0070,0041) CS 1
#[rustfmt::skip]
pub const IMAGE_HORIZONTAL_FLIP: Tag = Tag(0x0070, 0x0041);
/// ImageRotation (0070,0042) US 1
#[rustfmt::skip]
pub const IMAGE_ROTATION: Tag = Tag(0x0070, 0x0042);
/// DisplayedAreaTopLeftHandCorner (0070,0052) SL 2
#[rustfmt::skip]
pub const DISPLAYED_AREA_TOP_LEFT_HAND_CORNER: Tag = Tag(0x0070, 0x0052);
/// DisplayedAreaBottomRightHandCorner (0070,0053) SL 2
#[rustfmt::skip]
pub const DISPLAYED_AREA_BOTTOM_RIGHT_HAND_CORNER: Tag = Tag(0x0070, 0x0053);
/// DisplayedAreaSelectionSequence (0070,005A) SQ 1
#[rustfmt::skip]
pub const DISPLAYED_AREA_SELECTION_SEQUENCE: Tag = Tag(0x0070, 0x005A);
/// GraphicLayerSequence (0070,0060) SQ 1
#[rustfmt::skip]
pub const GRAPHIC_LAYER_SEQUENCE: Tag = Tag(0x0070, 0x0060);
/// GraphicLayerOrder (0070,0062) IS 1
#[rustfmt::skip]
pub const GRAPHIC_LAYER_ORDER: Tag = Tag(0x0070, 0x0062);
/// GraphicLayerRecommendedDisplayGrayscaleValue (0070,0066) US 1
#[rustfmt::skip]
pub const GRAPHIC_LAYER_RECOMMENDED_DISPLAY_GRAYSCALE_VALUE: Tag = Tag(0x0070, 0x0066);
/// GraphicLayerDescription (0070,0068) LO 1
#[rustfmt::skip]
pub const GRAPHIC_LAYER_DESCRIPTION: Tag = Tag(0x0070, 0x0068);
/// ContentLabel (0070,0080) CS 1
#[rustfmt::skip]
pub const CONTENT_LABEL: Tag = Tag(0x0070, 0x0080);
/// ContentDescription (0070,0081) LO 1
#[rustfmt::skip]
pub const CONTENT_DESCRIPTION: Tag = Tag(0x0070, 0x0081);
/// PresentationCreationDate (0070,0082) DA 1
#[rustfmt::skip]
pub const PRESENTATION_CREATION_DATE: Tag = Tag(0x0070, 0x0082);
/// PresentationCreationTime (0070,0083) TM 1
#[rustfmt::skip]
pub const PRESENTATION_CREATION_TIME: Tag = Tag(0x0070, 0x0083);
/// ContentCreatorName (0070,0084) PN 1
#[rustfmt::skip]
pub const CONTENT_CREATOR_NAME: Tag = Tag(0x0070, 0x0084);
/// ContentCreatorIdentificationCodeSequence (0070,0086) SQ 1
#[rustfmt::skip]
pub const CONTENT_CREATOR_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0070, 0x0086);
/// AlternateContentDescriptionSequence (0070,0087) SQ 1
#[rustfmt::skip]
pub const ALTERNATE_CONTENT_DESCRIPTION_SEQUENCE: Tag = Tag(0x0070, 0x0087);
/// PresentationSizeMode (0070,0100) CS 1
#[rustfmt::skip]
pub const PRESENTATION_SIZE_MODE: Tag = Tag(0x0070, 0x0100);
/// PresentationPixelSpacing (0070,0101) DS 2
#[rustfmt::skip]
pub const PRESENTATION_PIXEL_SPACING: Tag = Tag(0x0070, 0x0101);
/// PresentationPixelAspectRatio (0070,0102) IS 2
#[rustfmt::skip]
pub const PRESENTATION_PIXEL_ASPECT_RATIO: Tag = Tag(0x0070, 0x0102);
/// PresentationPixelMagnificationRatio (0070,0103) FL 1
#[rustfmt::skip]
pub const PRESENTATION_PIXEL_MAGNIFICATION_RATIO: Tag = Tag(0x0070, 0x0103);
/// GraphicGroupLabel (0070,0207) LO 1
#[rustfmt::skip]
pub const GRAPHIC_GROUP_LABEL: Tag = Tag(0x0070, 0x0207);
/// GraphicGroupDescription (0070,0208) ST 1
#[rustfmt::skip]
pub const GRAPHIC_GROUP_DESCRIPTION: Tag = Tag(0x0070, 0x0208);
/// CompoundGraphicSequence (0070,0209) SQ 1
#[rustfmt::skip]
pub const COMPOUND_GRAPHIC_SEQUENCE: Tag = Tag(0x0070, 0x0209);
/// CompoundGraphicInstanceID (0070,0226) UL 1
#[rustfmt::skip]
pub const COMPOUND_GRAPHIC_INSTANCE_ID: Tag = Tag(0x0070, 0x0226);
/// FontName (0070,0227) LO 1
#[rustfmt::skip]
pub const FONT_NAME: Tag = Tag(0x0070, 0x0227);
/// FontNameType (0070,0228) CS 1
#[rustfmt::skip]
pub const FONT_NAME_TYPE: Tag = Tag(0x0070, 0x0228);
/// CSSFontName (0070,0229) LO 1
#[rustfmt::skip]
pub const CSS_FONT_NAME: Tag = Tag(0x0070, 0x0229);
/// RotationAngle (0070,0230) FD 1
#[rustfmt::skip]
pub const ROTATION_ANGLE: Tag = Tag(0x0070, 0x0230);
/// TextStyleSequence (0070,0231) SQ 1
#[rustfmt::skip]
pub const TEXT_STYLE_SEQUENCE: Tag = Tag(0x0070, 0x0231);
/// LineStyleSequence (0070,0232) SQ 1
#[rustfmt::skip]
pub const LINE_STYLE_SEQUENCE: Tag = Tag(0x0070, 0x0232);
/// FillStyleSequence (0070,0233) SQ 1
#[rustfmt::skip]
pub const FILL_STYLE_SEQUENCE: Tag = Tag(0x0070, 0x0233);
/// GraphicGroupSequence (0070,0234) SQ 1
#[rustfmt::skip]
pub const GRAPHIC_GROUP_SEQUENCE: Tag = Tag(0x0070, 0x0234);
/// TextColorCIELabValue (0070,0241) US 3
#[rustfmt::skip]
pub const TEXT_COLOR_CIE_LAB_VALUE: Tag = Tag(0x0070, 0x0241);
/// HorizontalAlignment (0070,0242) CS 1
#[rustfmt::skip]
pub const HORIZONTAL_ALIGNMENT: Tag = Tag(0x0070, 0x0242);
/// VerticalAlignment (0070,0243) CS 1
#[rustfmt::skip]
pub const VERTICAL_ALIGNMENT: Tag = Tag(0x0070, 0x0243);
/// ShadowStyle (0070,0244) CS 1
#[rustfmt::skip]
pub const SHADOW_STYLE: Tag = Tag(0x0070, 0x0244);
/// ShadowOffsetX (0070,0245) FL 1
#[rustfmt::skip]
pub const SHADOW_OFFSET_X: Tag = Tag(0x0070, 0x0245);
/// ShadowOffsetY (0070,0246) FL 1
#[rustfmt::skip]
pub const SHADOW_OFFSET_Y: Tag = Tag(0x0070, 0x0246);
/// ShadowColorCIELabValue (0070,0247) US 3
#[rustfmt::skip]
pub const SHADOW_COLOR_CIE_LAB_VALUE: Tag = Tag(0x0070, 0x0247);
/// Underlined (0070,0248) CS 1
#[rustfmt::skip]
pub const UNDERLINED: Tag = Tag(0x0070, 0x0248);
/// Bold (0070,0249) CS 1
#[rustfmt::skip]
pub const BOLD: Tag = Tag(0x0070, 0x0249);
/// Italic (0070,0250) CS 1
#[rustfmt::skip]
pub const ITALIC: Tag = Tag(0x0070, 0x0250);
/// PatternOnColorCIELabValue (0070,0251) US 3
#[rustfmt::skip]
pub const PATTERN_ON_COLOR_CIE_LAB_VALUE: Tag = Tag(0x0070, 0x0251);
/// PatternOffColorCIELabValue (0070,0252) US 3
#[rustfmt::skip]
pub const PATTERN_OFF_COLOR_CIE_LAB_VALUE: Tag = Tag(0x0070, 0x0252);
/// LineThickness (0070,0253) FL 1
#[rustfmt::skip]
pub const LINE_THICKNESS: Tag = Tag(0x0070, 0x0253);
/// LineDashingStyle (0070,0254) CS 1
#[rustfmt::skip]
pub const LINE_DASHING_STYLE: Tag = Tag(0x0070, 0x0254);
/// LinePattern (0070,0255) UL 1
#[rustfmt::skip]
pub const LINE_PATTERN: Tag = Tag(0x0070, 0x0255);
/// FillPattern (0070,0256) OB 1
#[rustfmt::skip]
pub const FILL_PATTERN: Tag = Tag(0x0070, 0x0256);
/// FillMode (0070,0257) CS 1
#[rustfmt::skip]
pub const FILL_MODE: Tag = Tag(0x0070, 0x0257);
/// ShadowOpacity (0070,0258) FL 1
#[rustfmt::skip]
pub const SHADOW_OPACITY: Tag = Tag(0x0070, 0x0258);
/// GapLength (0070,0261) FL 1
#[rustfmt::skip]
pub const GAP_LENGTH: Tag = Tag(0x0070, 0x0261);
/// DiameterOfVisibility (0070,0262) FL 1
#[rustfmt::skip]
pub const DIAMETER_OF_VISIBILITY: Tag = Tag(0x0070, 0x0262);
/// RotationPoint (0070,0273) FL 2
#[rustfmt::skip]
pub const ROTATION_POINT: Tag = Tag(0x0070, 0x0273);
/// TickAlignment (0070,0274) CS 1
#[rustfmt::skip]
pub const TICK_ALIGNMENT: Tag = Tag(0x0070, 0x0274);
/// ShowTickLabel (0070,0278) CS 1
#[rustfmt::skip]
pub const SHOW_TICK_LABEL: Tag = Tag(0x0070, 0x0278);
/// TickLabelAlignment (0070,0279) CS 1
#[rustfmt::skip]
pub const TICK_LABEL_ALIGNMENT: Tag = Tag(0x0070, 0x0279);
/// CompoundGraphicUnits (0070,0282) CS 1
#[rustfmt::skip]
pub const COMPOUND_GRAPHIC_UNITS: Tag = Tag(0x0070, 0x0282);
/// PatternOnOpacity (0070,0284) FL 1
#[rustfmt::skip]
pub const PATTERN_ON_OPACITY: Tag = Tag(0x0070, 0x0284);
/// PatternOffOpacity (0070,0285) FL 1
#[rustfmt::skip]
pub const PATTERN_OFF_OPACITY: Tag = Tag(0x0070, 0x0285);
/// MajorTicksSequence (0070,0287) SQ 1
#[rustfmt::skip]
pub const MAJOR_TICKS_SEQUENCE: Tag = Tag(0x0070, 0x0287);
/// TickPosition (0070,0288) FL 1
#[rustfmt::skip]
pub const TICK_POSITION: Tag = Tag(0x0070, 0x0288);
/// TickLabel (0070,0289) SH 1
#[rustfmt::skip]
pub const TICK_LABEL: Tag = Tag(0x0070, 0x0289);
/// CompoundGraphicType (0070,0294) CS 1
#[rustfmt::skip]
pub const COMPOUND_GRAPHIC_TYPE: Tag = Tag(0x0070, 0x0294);
/// GraphicGroupID (0070,0295) UL 1
#[rustfmt::skip]
pub const GRAPHIC_GROUP_ID: Tag = Tag(0x0070, 0x0295);
/// ShapeType (0070,0306) CS 1
#[rustfmt::skip]
pub const SHAPE_TYPE: Tag = Tag(0x0070, 0x0306);
/// RegistrationSequence (0070,0308) SQ 1
#[rustfmt::skip]
pub const REGISTRATION_SEQUENCE: Tag = Tag(0x0070, 0x0308);
/// MatrixRegistrationSequence (0070,0309) SQ 1
#[rustfmt::skip]
pub const MATRIX_REGISTRATION_SEQUENCE: Tag = Tag(0x0070, 0x0309);
/// MatrixSequence (0070,030A) SQ 1
#[rustfmt::skip]
pub const MATRIX_SEQUENCE: Tag = Tag(0x0070, 0x030A);
/// FrameOfReferenceTransformationMatrixType (0070,030C) CS 1
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_TRANSFORMATION_MATRIX_TYPE: Tag = Tag(0x0070, 0x030C);
/// RegistrationTypeCodeSequence (0070,030D) SQ 1
#[rustfmt::skip]
pub const REGISTRATION_TYPE_CODE_SEQUENCE: Tag = Tag(0x0070, 0x030D);
/// FiducialDescription (0070,030F) ST 1
#[rustfmt::skip]
pub const FIDUCIAL_DESCRIPTION: Tag = Tag(0x0070, 0x030F);
/// FiducialIdentifier (0070,0310) SH 1
#[rustfmt::skip]
pub const FIDUCIAL_IDENTIFIER: Tag = Tag(0x0070, 0x0310);
/// FiducialIdentifierCodeSequence (0070,0311) SQ 1
#[rustfmt::skip]
pub const FIDUCIAL_IDENTIFIER_CODE_SEQUENCE: Tag = Tag(0x0070, 0x0311);
/// ContourUncertaintyRadius (0070,0312) FD 1
#[rustfmt::skip]
pub const CONTOUR_UNCERTAINTY_RADIUS: Tag = Tag(0x0070, 0x0312);
/// UsedFiducialsSequence (0070,0314) SQ 1
#[rustfmt::skip]
pub const USED_FIDUCIALS_SEQUENCE: Tag = Tag(0x0070, 0x0314);
/// GraphicCoordinatesDataSequence (0070,0318) SQ 1
#[rustfmt::skip]
pub const GRAPHIC_COORDINATES_DATA_SEQUENCE: Tag = Tag(0x0070, 0x0318);
/// FiducialUID (0070,031A) UI 1
#[rustfmt::skip]
pub const FIDUCIAL_UID: Tag = Tag(0x0070, 0x031A);
/// FiducialSetSequence (0070,031C) SQ 1
#[rustfmt::skip]
pub const FIDUCIAL_SET_SEQUENCE: Tag = Tag(0x0070, 0x031C);
/// FiducialSequence (0070,031E) SQ 1
#[rustfmt::skip]
pub const FIDUCIAL_SEQUENCE: Tag = Tag(0x0070, 0x031E);
/// GraphicLayerRecommendedDisplayCIELabValue (0070,0401) US 3
#[rustfmt::skip]
pub const GRAPHIC_LAYER_RECOMMENDED_DISPLAY_CIE_LAB_VALUE: Tag = Tag(0x0070, 0x0401);
/// BlendingSequence (0070,0402) SQ 1
#[rustfmt::skip]
pub const BLENDING_SEQUENCE: Tag = Tag(0x0070, 0x0402);
/// RelativeOpacity (0070,0403) FL 1
#[rustfmt::skip]
pub const RELATIVE_OPACITY: Tag = Tag(0x0070, 0x0403);
/// ReferencedSpatialRegistrationSequence (0070,0404) SQ 1
#[rustfmt::skip]
pub const REFERENCED_SPATIAL_REGISTRATION_SEQUENCE: Tag = Tag(0x0070, 0x0404);
/// BlendingPosition (0070,0405) CS 1
#[rustfmt::skip]
pub const BLENDING_POSITION: Tag = Tag(0x0070, 0x0405);
/// StorageMediaFileSetID (0088,0130) SH 1
#[rustfmt::skip]
pub const STORAGE_MEDIA_FILE_SET_ID: Tag = Tag(0x0088, 0x0130);
/// StorageMediaFileSetUID (0088,0140) UI 1
#[rustfmt::skip]
pub const STORAGE_MEDIA_FILE_SET_UID: Tag = Tag(0x0088, 0x0140);
/// IconImageSequence (0088,0200) SQ 1
#[rustfmt::skip]
pub const ICON_IMAGE_SEQUENCE: Tag = Tag(0x0088, 0x0200);
/// TopicTitle (0088,0904) LO 1
#[rustfmt::skip]
pub const TOPIC_TITLE: Tag = Tag(0x0088, 0x0904);
/// TopicSubject (0088,0906) ST 1
#[rustfmt::skip]
pub const TOPIC_SUBJECT: Tag = Tag(0x0088, 0x0906);
/// TopicAuthor (0088,0910) LO 1
#[rustfmt::skip]
pub const TOPIC_AUTHOR: Tag = Tag(0x0088, 0x0910);
/// TopicKeywords (0088,0912) LO 1-32
#[rustfmt::skip]
pub const TOPIC_KEYWORDS: Tag = Tag(0x0088, 0x0912);
/// SOPInstanceStatus (0100,0410) CS 1
#[rustfmt::skip]
pub const SOP_INSTANCE_STATUS: Tag = Tag(0x0100, 0x0410);
/// SOPAuthorizationDateTime (0100,0420) DT 1
#[rustfmt::skip]
pub const SOP_AUTHORIZATION_DATE_TIME: Tag = Tag(0x0100, 0x0420);
/// SOPAuthorizationComment (0100,0424) LT 1
#[rustfmt::skip]
pub const SOP_AUTHORIZATION_COMMENT: Tag = Tag(0x0100, 0x0424);
/// AuthorizationEquipmentCertificationNumber (0100,0426) LO 1
#[rustfmt::skip]
pub const AUTHORIZATION_EQUIPMENT_CERTIFICATION_NUMBER: Tag = Tag(0x0100, 0x0426);
/// MACIDNumber (0400,0005) US 1
#[rustfmt::skip]
pub const MACID_NUMBER: Tag = Tag(0x0400, 0x0005);
/// MACCalculationTransferSyntaxUID (0400,0010) UI 1
#[rustfmt::skip]
pub const MAC_CALCULATION_TRANSFER_SYNTAX_UID: Tag = Tag(0x0400, 0x0010);
/// MACAlgorithm (0400,0015) CS 1
#[rustfmt::skip]
pub const MAC_ALGORITHM: Tag = Tag(0x0400, 0x0015);
/// DataElementsSigned (0400,0020) AT 1-n
#[rustfmt::skip]
pub const DATA_ELEMENTS_SIGNED: Tag = Tag(0x0400, 0x0020);
/// DigitalSignatureUID (0400,0100) UI 1
#[rustfmt::skip]
pub const DIGITAL_SIGNATURE_UID: Tag = Tag(0x0400, 0x0100);
/// DigitalSignatureDateTime (0400,0105) DT 1
#[rustfmt::skip]
pub const DIGITAL_SIGNATURE_DATE_TIME: Tag = Tag(0x0400, 0x0105);
/// CertificateType (0400,0110) CS 1
#[rustfmt::skip]
pub const CERTIFICATE_TYPE: Tag = Tag(0x0400, 0x0110);
/// CertificateOfSigner (0400,0115) OB 1
#[rustfmt::skip]
pub const CERTIFICATE_OF_SIGNER: Tag = Tag(0x0400, 0x0115);
/// Signature (0400,0120) OB 1
#[rustfmt::skip]
pub const SIGNATURE: Tag = Tag(0x0400, 0x0120);
/// CertifiedTimestampType (0400,0305) CS 1
#[rustfmt::skip]
pub const CERTIFIED_TIMESTAMP_TYPE: Tag = Tag(0x0400, 0x0305);
/// CertifiedTimestamp (0400,0310) OB 1
#[rustfmt::skip]
pub const CERTIFIED_TIMESTAMP: Tag = Tag(0x0400, 0x0310);
/// DigitalSignaturePurposeCodeSequence (0400,0401) SQ 1
#[rustfmt::skip]
pub const DIGITAL_SIGNATURE_PURPOSE_CODE_SEQUENCE: Tag = Tag(0x0400, 0x0401);
/// ReferencedDigitalSignatureSequence (0400,0402) SQ 1
#[rustfmt::skip]
pub const REFERENCED_DIGITAL_SIGNATURE_SEQUENCE: Tag = Tag(0x0400, 0x0402);
/// ReferencedSOPInstanceMACSequence (0400,0403) SQ 1
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_MAC_SEQUENCE: Tag = Tag(0x0400, 0x0403);
/// MAC (0400,0404) OB 1
#[rustfmt::skip]
pub const MAC: Tag = Tag(0x0400, 0x0404);
/// EncryptedAttributesSequence (0400,0500) SQ 1
#[rustfmt::skip]
pub const ENCRYPTED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0500);
/// EncryptedContentTransferSyntaxUID (0400,0510) UI 1
#[rustfmt::skip]
pub const ENCRYPTED_CONTENT_TRANSFER_SYNTAX_UID: Tag = Tag(0x0400, 0x0510);
/// EncryptedContent (0400,0520) OB 1
#[rustfmt::skip]
pub const ENCRYPTED_CONTENT: Tag = Tag(0x0400, 0x0520);
/// ModifiedAttributesSequence (0400,0550) SQ 1
#[rustfmt::skip]
pub const MODIFIED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0550);
/// NonconformingModifiedAttributesSequence (0400,0551) SQ 1
#[rustfmt::skip]
pub const NONCONFORMING_MODIFIED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0551);
/// NonconformingDataElementValue (0400,0552) OB 1
#[rustfmt::skip]
pub const NONCONFORMING_DATA_ELEMENT_VALUE: Tag = Tag(0x0400, 0x0552);
/// OriginalAttributesSequence (0400,0561) SQ 1
#[rustfmt::skip]
pub const ORIGINAL_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0561);
/// AttributeModificationDateTime (0400,0562) DT 1
#[rustfmt::skip]
pub const ATTRIBUTE_MODIFICATION_DATE_TIME: Tag = Tag(0x0400, 0x0562);
/// ModifyingSystem (0400,0563) LO 1
#[rustfmt::skip]
pub const MODIFYING_SYSTEM: Tag = Tag(0x0400, 0x0563);
/// SourceOfPreviousValues (0400,0564) LO 1
#[rustfmt::skip]
pub const SOURCE_OF_PREVIOUS_VALUES: Tag = Tag(0x0400, 0x0564);
/// ReasonForTheAttributeModification (0400,0565) CS 1
#[rustfmt::skip]
pub const REASON_FOR_THE_ATTRIBUTE_MODIFICATION: Tag = Tag(0x0400, 0x0565);
/// PresentationLUTSequence (2050,0010) SQ 1
#[rustfmt::skip]
pub const PRESENTATION_LUT_SEQUENCE: Tag = Tag(0x2050, 0x0010);
/// PresentationLUTShape (2050,0020) CS 1
#[rustfmt::skip]
pub const PRESENTATION_LUT_SHAPE: Tag = Tag(0x2050, 0x0020);
/// ReferencedPresentationLUTSequence (2050,0500) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PRESENTATION_LUT_SEQUENCE: Tag = Tag(0x2050, 0x0500);
/// RTImageLabel (3002,0002) SH 1
#[rustfmt::skip]
pub const RT_IMAGE_LABEL: Tag = Tag(0x3002, 0x0002);
/// RTImageName (3002,0003) LO 1
#[rustfmt::skip]
pub const RT_IMAGE_NAME: Tag = Tag(0x3002, 0x0003);
/// RTImageDescription (3002,0004) ST 1
#[rustfmt::skip]
pub const RT_IMAGE_DESCRIPTION: Tag = Tag(0x3002, 0x0004);
/// ReportedValuesOrigin (3002,000A) CS 1
#[rustfmt::skip]
pub const REPORTED_VALUES_ORIGIN: Tag = Tag(0x3002, 0x000A);
/// RTImagePlane (3002,000C) CS 1
#[rustfmt::skip]
pub const RT_IMAGE_PLANE: Tag = Tag(0x3002, 0x000C);
/// XRayImageReceptorTranslation (3002,000D) DS 3
#[rustfmt::skip]
pub const X_RAY_IMAGE_RECEPTOR_TRANSLATION: Tag = Tag(0x3002, 0x000D);
/// XRayImageReceptorAngle (3002,000E) DS 1
#[rustfmt::skip]
pub const X_RAY_IMAGE_RECEPTOR_ANGLE: Tag = Tag(0x3002, 0x000E);
/// RTImageOrientation (3002,0010) DS 6
#[rustfmt::skip]
pub const RT_IMAGE_ORIENTATION: Tag = Tag(0x3002, 0x0010);
/// ImagePlanePixelSpacing (3002,0011) DS 2
#[rustfmt::skip]
pub const IMAGE_PLANE_PIXEL_SPACING: Tag = Tag(0x3002, 0x0011);
/// RTImagePosition (3002,0012) DS 2
#[rustfmt::skip]
pub const RT_IMAGE_POSITION: Tag = Tag(0x3002, 0x0012);
/// RadiationMachineName (3002,0020) SH 1
#[rustfmt::skip]
pub const RADIATION_MACHINE_NAME: Tag = Tag(0x3002, 0x0020);
/// RadiationMachineSAD (3002,0022) DS 1
#[rustfmt::skip]
pub const RADIATION_MACHINE_SAD: Tag = Tag(0x3002, 0x0022);
/// RadiationMachineSSD (3002,0024) DS 1
#[rustfmt::skip]
pub const RADIATION_MACHINE_SSD: Tag = Tag(0x3002, 0x0024);
/// RTImageSID (3002,0026) DS 1
#[rustfmt::skip]
pub const RT_IMAGE_SID: Tag = Tag(0x3002, 0x0026);
/// SourceToReferenceObjectDistance (3002,0028) DS 1
#[rustfmt::skip]
pub const SOURCE_TO_REFERENCE_OBJECT_DISTANCE: Tag = Tag(0x3002, 0x0028);
/// FractionNumber (3002,0029) IS 1
#[rustfmt::skip]
pub const FRACTION_NUMBER: Tag = Tag(0x3002, 0x0029);
/// ExposureSequence (3002,0030) SQ 1
#[rustfmt::skip]
pub const EXPOSURE_SEQUENCE: Tag = Tag(0x3002, 0x0030);
/// MetersetExposure (3002,0032) DS 1
#[rustfmt::skip]
pub const METERSET_EXPOSURE: Tag = Tag(0x3002, 0x0032);
/// DiaphragmPosition (3002,0034) DS 4
#[rustfmt::skip]
pub const DIAPHRAGM_POSITION: Tag = Tag(0x3002, 0x0034);
/// FluenceMapSequence (3002,0040) SQ 1
#[rustfmt::skip]
pub const FLUENCE_MAP_SEQUENCE: Tag = Tag(0x3002, 0x0040);
/// FluenceDataSource (3002,0041) CS 1
#[rustfmt::skip]
pub const FLUENCE_DATA_SOURCE: Tag = Tag(0x3002, 0x0041);
/// FluenceDataScale (3002,0042) DS 1
#[rustfmt::skip]
pub const FLUENCE_DATA_SCALE: Tag = Tag(0x3002, 0x0042);
/// PrimaryFluenceModeSequence (3002,0050) SQ 1
#[rustfmt::skip]
pub const PRIMARY_FLUENCE_MODE_SEQUENCE: Tag = Tag(0x3002, 0x0050);
/// FluenceMode (3002,0051) CS 1
#[rustfmt::skip]
pub const FLUENCE_MODE: Tag = Tag(0x3002, 0x0051);
/// FluenceModeID (3002,0052) SH 1
#[rustfmt::skip]
pub const FLUENCE_MODE_ID: Tag = Tag(0x3002, 0x0052);
/// DVHType (3004,0001) CS 1
#[rustfmt::skip]
pub const DVH_TYPE: Tag = Tag(0x3004, 0x0001);
/// DoseUnits (3004,0002) CS 1
#[rustfmt::skip]
pub const DOSE_UNITS: Tag = Tag(0x3004, 0x0002);
/// DoseType (3004,0004) CS 1
#[rustfmt::skip]
pub const DOSE_TYPE: Tag = Tag(0x3004, 0x0004);
/// SpatialTransformOfDose (3004,0005) CS 1
#[rustfmt::skip]
pub const SPATIAL_TRANSFORM_OF_DOSE: Tag = Tag(0x3004, 0x0005);
/// DoseComment (3004,0006) LO 1
#[rustfmt::skip]
pub const DOSE_COMMENT: Tag = Tag(0x3004, 0x0006);
/// NormalizationPoint (3004,0008) DS 3
#[rustfmt::skip]
pub const NORMALIZATION_POINT: Tag = Tag(0x3004, 0x0008);
/// DoseSummationType (3004,000A) CS 1
#[rustfmt::skip]
pub const DOSE_SUMMATION_TYPE: Tag = Tag(0x3004, 0x000A);
/// GridFrameOffsetVector (3004,000C) DS 2-n
#[rustfmt::skip]
pub const GRID_FRAME_OFFSET_VECTOR: Tag = Tag(0x3004, 0x000C);
/// DoseGridScaling (3004,000E) DS 1
#[rustfmt::skip]
pub const DOSE_GRID_SCALING: Tag = Tag(0x3004, 0x000E);
/// RTDoseROISequence (3004,0010) SQ 1
#[rustfmt::skip]
pub const RT_DOSE_ROI_SEQUENCE: Tag = Tag(0x3004, 0x0010);
/// DoseValue (3004,0012) DS 1
#[rustfmt::skip]
pub const DOSE_VALUE: Tag = Tag(0x3004, 0x0012);
/// TissueHeterogeneityCorrection (3004,0014) CS 1-3
#[rustfmt::skip]
pub const TISSUE_HETEROGENEITY_CORRECTION: Tag = Tag(0x3004, 0x0014);
/// DVHNormalizationPoint (3004,0040) DS 3
#[rustfmt::skip]
pub const DVH_NORMALIZATION_POINT: Tag = Tag(0x3004, 0x0040);
/// DVHNormalizationDoseValue (3004,0042) DS 1
#[rustfmt::skip]
pub const DVH_NORMALIZATION_DOSE_VALUE: Tag = Tag(0x3004, 0x0042);
/// DVHSequence (3004,0050) SQ 1
#[rustfmt::skip]
pub const DVH_SEQUENCE: Tag = Tag(0x3004, 0x0050);
/// DVHDoseScaling (3004,0052) DS 1
#[rustfmt::skip]
pub const DVH_DOSE_SCALING: Tag = Tag(0x3004, 0x0052);
/// DVHVolumeUnits (3004,0054) CS 1
#[rustfmt::skip]
pub const DVH_VOLUME_UNITS: Tag = Tag(0x3004, 0x0054);
/// DVHNumberOfBins (3004,0056) IS 1
#[rustfmt::skip]
pub const DVH_NUMBER_OF_BINS: Tag = Tag(0x3004, 0x0056);
/// DVHData (3004,0058) DS 2-2n
#[rustfmt::skip]
pub const DVH_DATA: Tag = Tag(0x3004, 0x0058);
/// DVHReferencedROISequence (3004,0060) SQ 1
#[rustfmt::skip]
pub const DVH_REFERENCED_ROI_SEQUENCE: Tag = Tag(0x3004, 0x0060);
/// DVHROIContributionType (3004,0062) CS 1
#[rustfmt::skip]
pub const DVHROI_CONTRIBUTION_TYPE: Tag = Tag(0x3004, 0x0062);
/// DVHMinimumDose (3004,0070) DS 1
#[rustfmt::skip]
pub const DVH_MINIMUM_DOSE: Tag = Tag(0x3004, 0x0070);
/// DVHMaximumDose (3004,0072) DS 1
#[rustfmt::skip]
pub const DVH_MAXIMUM_DOSE: Tag = Tag(0x3004, 0x0072);
/// DVHMeanDose (3004,0074) DS 1
#[rustfmt::skip]
pub const DVH_MEAN_DOSE: Tag = Tag(0x3004, 0x0074);
/// StructureSetLabel (3006,0002) SH 1
#[rustfmt::skip]
pub const STRUCTURE_SET_LABEL: Tag = Tag(0x3006, 0x0002);
/// StructureSetName (3006,0004) LO 1
#[rustfmt::skip]
pub const STRUCTURE_SET_NAME: Tag = Tag(0x3006, 0x0004);
/// StructureSetDescription (3006,0006) ST 1
#[rustfmt::skip]
pub const STRUCTURE_SET_DESCRIPTION: Tag = Tag(0x3006, 0x0006);
/// StructureSetDate (3006,0008) DA 1
#[rustfmt::skip]
pub const STRUCTURE_SET_DATE: Tag = Tag(0x3006, 0x0008);
/// StructureSetTime (3006,0009) TM 1
#[rustfmt::skip]
pub const STRUCTURE_SET_TIME: Tag = Tag(0x3006, 0x0009);
/// ReferencedFrameOfReferenceSequence (3006,0010) SQ 1
#[rustfmt::skip]
pub const REFERENCED_FRAME_OF_REFERENCE_SEQUENCE: Tag = Tag(0x3006, 0x0010);
/// RTReferencedStudySequence (3006,0012) SQ 1
#[rustfmt::skip]
pub const RT_REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x3006, 0x0012);
/// RTReferencedSeriesSequence (3006,0014) SQ 1
#[rustfmt::skip]
pub const RT_REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x3006, 0x0014);
/// ContourImageSequence (3006,0016) SQ 1
#[rustfmt::skip]
pub const CONTOUR_IMAGE_SEQUENCE: Tag = Tag(0x3006, 0x0016);
/// PredecessorStructureSetSequence (3006,0018) SQ 1
#[rustfmt::skip]
pub const PREDECESSOR_STRUCTURE_SET_SEQUENCE: Tag = Tag(0x3006, 0x0018);
/// StructureSetROISequence (3006,0020) SQ 1
#[rustfmt::skip]
pub const STRUCTURE_SET_ROI_SEQUENCE: Tag = Tag(0x3006, 0x0020);
/// ROINumber (3006,0022) IS 1
#[rustfmt::skip]
pub const ROI_NUMBER: Tag = Tag(0x3006, 0x0022);
/// ReferencedFrameOfReferenceUID (3006,0024) UI 1
#[rustfmt::skip]
pub const REFERENCED_FRAME_OF_REFERENCE_UID: Tag = Tag(0x3006, 0x0024);
/// ROIName (3006,0026) LO 1
#[rustfmt::skip]
pub const ROI_NAME: Tag = Tag(0x3006, 0x0026);
/// ROIDescription (3006,0028) ST 1
#[rustfmt::skip]
pub const ROI_DESCRIPTION: Tag = Tag(0x3006, 0x0028);
/// ROIDisplayColor (3006,002A) IS 3
#[rustfmt::skip]
pub const ROI_DISPLAY_COLOR: Tag = Tag(0x3006, 0x002A);
/// ROIVolume (3006,002C) DS 1
#[rustfmt::skip]
pub const ROI_VOLUME: Tag = Tag(0x3006, 0x002C);
/// ROIDateTime (3006,002D) DT 1
#[rustfmt::skip]
pub const ROI_DATE_TIME: Tag = Tag(0x3006, 0x002D);
/// ROIObservationDateTime (3006,002E) DT 1
#[rustfmt::skip]
pub const ROI_OBSERVATION_DATE_TIME: Tag = Tag(0x3006, 0x002E);
/// RTRelatedROISequence (3006,0030) SQ 1
#[rustfmt::skip]
pub const RT_RELATED_ROI_SEQUENCE: Tag = Tag(0x3006, 0x0030);
/// RTROIRelationship (3006,0033) CS 1
#[rustfmt::skip]
pub const RTROI_RELATIONSHIP: Tag = Tag(0x3006, 0x0033);
/// ROIGenerationAlgorithm (3006,0036) CS 1
#[rustfmt::skip]
pub const ROI_GENERATION_ALGORITHM: Tag = Tag(0x3006, 0x0036);
/// ROIDerivationAlgorithmIdentificationSequence (3006,0037) SQ 1
#[rustfmt::skip]
pub const ROI_DERIVATION_ALGORITHM_IDENTIFICATION_SEQUENCE: Tag = Tag(0x3006, 0x0037);
/// ROIGenerationDescription (3006,0038) LO 1
#[rustfmt::skip]
pub const ROI_GENERATION_DESCRIPTION: Tag = Tag(0x3006, 0x0038);
/// ROIContourSequence (3006,0039) SQ 1
#[rustfmt::skip]
pub const ROI_CONTOUR_SEQUENCE: Tag = Tag(0x3006, 0x0039);
/// ContourSequence (3006,0040) SQ 1
#[rustfmt::skip]
pub const CONTOUR_SEQUENCE: Tag = Tag(0x3006, 0x0040);
/// ContourGeometricType (3006,0042) CS 1
#[rustfmt::skip]
pub const CONTOUR_GEOMETRIC_TYPE: Tag = Tag(0x3006, 0x0042);
/// ContourSlabThickness (3006,0044) DS 1
#[rustfmt::skip]
pub const CONTOUR_SLAB_THICKNESS: Tag = Tag(0x3006, 0x0044);
/// ContourOffsetVector (3006,0045) DS 3
#[rustfmt::skip]
pub const CONTOUR_OFFSET_VECTOR: Tag = Tag(0x3006, 0x0045);
/// NumberOfContourPoints (3006,0046) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_CONTOUR_POINTS: Tag = Tag(0x3006, 0x0046);
/// ContourNumber (3006,0048) IS 1
#[rustfmt::skip]
pub const CONTOUR_NUMBER: Tag = Tag(0x3006, 0x0048);
/// AttachedContours (3006,0049) IS 1-n
#[rustfmt::skip]
pub const ATTACHED_CONTOURS: Tag = Tag(0x3006, 0x0049);
/// ContourData (3006,0050) DS 3-3n
#[rustfmt::skip]
pub const CONTOUR_DATA: Tag = Tag(0x3006, 0x0050);
/// RTROIObservationsSequence (3006,0080) SQ 1
#[rustfmt::skip]
pub const RTROI_OBSERVATIONS_SEQUENCE: Tag = Tag(0x3006, 0x0080);
/// ObservationNumber (3006,0082) IS 1
#[rustfmt::skip]
pub const OBSERVATION_NUMBER: Tag = Tag(0x3006, 0x0082);
/// ReferencedROINumber (3006,0084) IS 1
#[rustfmt::skip]
pub const REFERENCED_ROI_NUMBER: Tag = Tag(0x3006, 0x0084);
/// ROIObservationLabel (3006,0085) SH 1
#[rustfmt::skip]
pub const ROI_OBSERVATION_LABEL: Tag = Tag(0x3006, 0x0085);
/// RTROIIdentificationCodeSequence (3006,0086) SQ 1
#[rustfmt::skip]
pub const RTROI_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x3006, 0x0086);
/// ROIObservationDescription (3006,0088) ST 1
#[rustfmt::skip]
pub const ROI_OBSERVATION_DESCRIPTION: Tag = Tag(0x3006, 0x0088);
/// RelatedRTROIObservationsSequence (3006,00A0) SQ 1
#[rustfmt::skip]
pub const RELATED_RTROI_OBSERVATIONS_SEQUENCE: Tag = Tag(0x3006, 0x00A0);
/// RTROIInterpretedType (3006,00A4) CS 1
#[rustfmt::skip]
pub const RTROI_INTERPRETED_TYPE: Tag = Tag(0x3006, 0x00A4);
/// ROIInterpreter (3006,00A6) PN 1
#[rustfmt::skip]
pub const ROI_INTERPRETER: Tag = Tag(0x3006, 0x00A6);
/// ROIPhysicalPropertiesSequence (3006,00B0) SQ 1
#[rustfmt::skip]
pub const ROI_PHYSICAL_PROPERTIES_SEQUENCE: Tag = Tag(0x3006, 0x00B0);
/// ROIPhysicalProperty (3006,00B2) CS 1
#[rustfmt::skip]
pub const ROI_PHYSICAL_PROPERTY: Tag = Tag(0x3006, 0x00B2);
/// ROIPhysicalPropertyValue (3006,00B4) DS 1
#[rustfmt::skip]
pub const ROI_PHYSICAL_PROPERTY_VALUE: Tag = Tag(0x3006, 0x00B4);
/// ROIElementalCompositionSequence (3006,00B6) SQ 1
#[rustfmt::skip]
pub const ROI_ELEMENTAL_COMPOSITION_SEQUENCE: Tag = Tag(0x3006, 0x00B6);
/// ROIElementalCompositionAtomicNumber (3006,00B7) US 1
#[rustfmt::skip]
pub const ROI_ELEMENTAL_COMPOSITION_ATOMIC_NUMBER: Tag = Tag(0x3006, 0x00B7);
/// ROIElementalCompositionAtomicMassFraction (3006,00B8) FL 1
#[rustfmt::skip]
pub const ROI_ELEMENTAL_COMPOSITION_ATOMIC_MASS_FRACTION: Tag = Tag(0x3006, 0x00B8);
/// FrameOfReferenceRelationshipSequence (3006,00C0) SQ 1
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_RELATIONSHIP_SEQUENCE: Tag = Tag(0x3006, 0x00C0);
/// RelatedFrameOfReferenceUID (3006,00C2) UI 1
#[rustfmt::skip]
pub const RELATED_FRAME_OF_REFERENCE_UID: Tag = Tag(0x3006, 0x00C2);
/// FrameOfReferenceTransformationType (3006,00C4) CS 1
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_TRANSFORMATION_TYPE: Tag = Tag(0x3006, 0x00C4);
/// FrameOfReferenceTransformationMatrix (3006,00C6) DS 16
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_TRANSFORMATION_MATRIX: Tag = Tag(0x3006, 0x00C6);
/// FrameOfReferenceTransformationComment (3006,00C8) LO 1
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_TRANSFORMATION_COMMENT: Tag = Tag(0x3006, 0x00C8);
/// RTPlanLabel (300A,0002) SH 1
#[rustfmt::skip]
pub const RT_PLAN_LABEL: Tag = Tag(0x300A, 0x0002);
/// RTPlanName (300A,0003) LO 1
#[rustfmt::skip]
pub const RT_PLAN_NAME: Tag = Tag(0x300A, 0x0003);
/// RTPlanDescription (300A,0004) ST 1
#[rustfmt::skip]
pub const RT_PLAN_DESCRIPTION: Tag = Tag(0x300A, 0x0004);
/// RTPlanDate (300A,0006) DA 1
#[rustfmt::skip]
pub const RT_PLAN_DATE: Tag = Tag(0x300A, 0x0006);
/// RTPlanTime (300A,0007) TM 1
#[rustfmt::skip]
pub const RT_PLAN_TIME: Tag = Tag(0x300A, 0x0007);
/// TreatmentProtocols (300A,0009) LO 1-n
#[rustfmt::skip]
pub const TREATMENT_PROTOCOLS: Tag = Tag(0x300A, 0x0009);
/// PlanIntent (300A,000A) CS 1
#[rustfmt::skip]
pub const PLAN_INTENT: Tag = Tag(0x300A, 0x000A);
/// TreatmentSites (300A,000B) LO 1-n
#[rustfmt::skip]
pub const TREATMENT_SITES: Tag = Tag(0x300A, 0x000B);
/// RTPlanGeometry (300A,000C) CS 1
#[rustfmt::skip]
pub const RT_PLAN_GEOMETRY: Tag = Tag(0x300A, 0x000C);
/// PrescriptionDescription (300A,000E) ST 1
#[rustfmt::skip]
pub const PRESCRIPTION_DESCRIPTION: Tag = Tag(0x300A, 0x000E);
/// DoseReferenceSequence (300A,0010) SQ 1
#[rustfmt::skip]
pub const DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x300A, 0x0010);
/// DoseReferenceNumber (300A,0012) IS 1
#[rustfmt::skip]
pub const DOSE_REFERENCE_NUMBER: Tag = Tag(0x300A, 0x0012);
/// DoseReferenceUID (300A,0013) UI 1
#[rustfmt::skip]
pub const DOSE_REFERENCE_UID: Tag = Tag(0x300A, 0x0013);
/// DoseReferenceStructureType (300A,0014) CS 1
#[rustfmt::skip]
pub const DOSE_REFERENCE_STRUCTURE_TYPE: Tag = Tag(0x300A, 0x0014);
/// NominalBeamEnergyUnit (300A,0015) CS 1
#[rustfmt::skip]
pub const NOMINAL_BEAM_ENERGY_UNIT: Tag = Tag(0x300A, 0x0015);
/// DoseReferenceDescription (300A,0016) LO 1
#[rustfmt::skip]
pub const DOSE_REFERENCE_DESCRIPTION: Tag = Tag(0x300A, 0x0016);
/// DoseReferencePointCoordinates (300A,0018) DS 3
#[rustfmt::skip]
pub const DOSE_REFERENCE_POINT_COORDINATES: Tag = Tag(0x300A, 0x0018);
/// NominalPriorDose (300A,001A) DS 1
#[rustfmt::skip]
pub const NOMINAL_PRIOR_DOSE: Tag = Tag(0x300A, 0x001A);
/// DoseReferenceType (300A,0020) CS 1
#[rustfmt::skip]
pub const DOSE_REFERENCE_TYPE: Tag = Tag(0x300A, 0x0020);
/// ConstraintWeight (300A,0021) DS 1
#[rustfmt::skip]
pub const CONSTRAINT_WEIGHT: Tag = Tag(0x300A, 0x0021);
/// DeliveryWarningDose (300A,0022) DS 1
#[rustfmt::skip]
pub const DELIVERY_WARNING_DOSE: Tag = Tag(0x300A, 0x0022);
/// DeliveryMaximumDose (300A,0023) DS 1
#[rustfmt::skip]
pub const DELIVERY_MAXIMUM_DOSE: Tag = Tag(0x300A, 0x0023);
/// TargetMinimumDose (300A,0025) DS 1
#[rustfmt::skip]
pub const TARGET_MINIMUM_DOSE: Tag = Tag(0x300A, 0x0025);
/// TargetPrescriptionDose (300A,0026) DS 1
#[rustfmt::skip]
pub const TARGET_PRESCRIPTION_DOSE: Tag = Tag(0x300A, 0x0026);
/// TargetMaximumDose (300A,0027) DS 1
#[rustfmt::skip]
pub const TARGET_MAXIMUM_DOSE: Tag = Tag(0x300A, 0x0027);
/// TargetUnderdoseVolumeFraction (300A,0028) DS 1
#[rustfmt::skip]
pub const TARGET_UNDERDOSE_VOLUME_FRACTION: Tag = Tag(0x300A, 0x0028);
/// OrganAtRiskFullVolumeDose (300A,002A) DS 1
#[rustfmt::skip]
pub const ORGAN_AT_RISK_FULL_VOLUME_DOSE: Tag = Tag(0x300A, 0x002A);
/// OrganAtRiskLimitDose (300A,002B) DS 1
#[rustfmt::skip]
pub const ORGAN_AT_RISK_LIMIT_DOSE: Tag = Tag(0x300A, 0x002B);
/// OrganAtRiskMaximumDose (300A,002C) DS 1
#[rustfmt::skip]
pub const ORGAN_AT_RISK_MAXIMUM_DOSE: Tag = Tag(0x300A, 0x002C);
/// OrganAtRiskOverdoseVolumeFraction (300A,002D) DS 1
#[rustfmt::skip]
pub const ORGAN_AT_RISK_OVERDOSE_VOLUME_FRACTION: Tag = Tag(0x300A, 0x002D);
/// ToleranceTableSequence (300A,0040) SQ 1
#[rustfmt::skip]
pub const TOLERANCE_TABLE_SEQUENCE: Tag = Tag(0x300A, 0x0040);
/// ToleranceTableNumber (300A,0042) IS 1
#[rustfmt::skip]
pub const TOLERANCE_TABLE_NUMBER: Tag = Tag(0x300A, 0x0042);
/// ToleranceTableLabel (300A,0043) SH 1
#[rustfmt::skip]
pub const TOLERANCE_TABLE_LABEL: Tag = Tag(0x300A, 0x0043);
/// GantryAngleTolerance (300A,0044) DS 1
#[rustfmt::skip]
pub const GANTRY_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x0044);
/// BeamLimitingDeviceAngleTolerance (300A,0046) DS 1
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x0046);
/// BeamLimitingDeviceToleranceSequence (300A,0048) SQ 1
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_TOLERANCE_SEQUENCE: Tag = Tag(0x300A, 0x0048);
/// BeamLimitingDevicePositionTolerance (300A,004A) DS 1
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_POSITION_TOLERANCE: Tag = Tag(0x300A, 0x004A);
/// PatientSupportAngleTolerance (300A,004C) DS 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x004C);
/// TableTopEccentricAngleTolerance (300A,004E) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_ECCENTRIC_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x004E);
/// TableTopVerticalPositionTolerance (300A,0051) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_VERTICAL_POSITION_TOLERANCE: Tag = Tag(0x300A, 0x0051);
/// TableTopLongitudinalPositionTolerance (300A,0052) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_LONGITUDINAL_POSITION_TOLERANCE: Tag = Tag(0x300A, 0x0052);
/// TableTopLateralPositionTolerance (300A,0053) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_LATERAL_POSITION_TOLERANCE: Tag = Tag(0x300A, 0x0053);
/// RTPlanRelationship (300A,0055) CS 1
#[rustfmt::skip]
pub const RT_PLAN_RELATIONSHIP: Tag = Tag(0x300A, 0x0055);
/// FractionGroupSequence (300A,0070) SQ 1
#[rustfmt::skip]
pub const FRACTION_GROUP_SEQUENCE: Tag = Tag(0x300A, 0x0070);
/// FractionGroupNumber (300A,0071) IS 1
#[rustfmt::skip]
pub const FRACTION_GROUP_NUMBER: Tag = Tag(0x300A, 0x0071);
/// FractionGroupDescription (300A,0072) LO 1
#[rustfmt::skip]
pub const FRACTION_GROUP_DESCRIPTION: Tag = Tag(0x300A, 0x0072);
/// NumberOfFractionsPlanned (300A,0078) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_FRACTIONS_PLANNED: Tag = Tag(0x300A, 0x0078);
/// NumberOfFractionPatternDigitsPerDay (300A,0079) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_FRACTION_PATTERN_DIGITS_PER_DAY: Tag = Tag(0x300A, 0x0079);
/// RepeatFractionCycleLength (300A,007A) IS 1
#[rustfmt::skip]
pub const REPEAT_FRACTION_CYCLE_LENGTH: Tag = Tag(0x300A, 0x007A);
/// FractionPattern (300A,007B) LT 1
#[rustfmt::skip]
pub const FRACTION_PATTERN: Tag = Tag(0x300A, 0x007B);
/// NumberOfBeams (300A,0080) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_BEAMS: Tag = Tag(0x300A, 0x0080);
/// BeamDoseSpecificationPoint (300A,0082) DS 3
#[rustfmt::skip]
pub const BEAM_DOSE_SPECIFICATION_POINT: Tag = Tag(0x300A, 0x0082);
/// BeamDose (300A,0084) DS 1
#[rustfmt::skip]
pub const BEAM_DOSE: Tag = Tag(0x300A, 0x0084);
/// BeamMeterset (300A,0086) DS 1
#[rustfmt::skip]
pub const BEAM_METERSET: Tag = Tag(0x300A, 0x0086);
/// NumberOfBrachyApplicationSetups (300A,00A0) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_BRACHY_APPLICATION_SETUPS: Tag = Tag(0x300A, 0x00A0);
/// BrachyApplicationSetupDoseSpecificationPoint (300A,00A2) DS 3
#[rustfmt::skip]
pub const BRACHY_APPLICATION_SETUP_DOSE_SPECIFICATION_POINT: Tag = Tag(0x300A, 0x00A2);
/// BrachyApplicationSetupDose (300A,00A4) DS 1
#[rustfmt::skip]
pub const BRACHY_APPLICATION_SETUP_DOSE: Tag = Tag(0x300A, 0x00A4);
/// BeamSequence (300A,00B0) SQ 1
#[rustfmt::skip]
pub const BEAM_SEQUENCE: Tag = Tag(0x300A, 0x00B0);
/// TreatmentMachineName (300A,00B2) SH 1
#[rustfmt::skip]
pub const TREATMENT_MACHINE_NAME: Tag = Tag(0x300A, 0x00B2);
/// PrimaryDosimeterUnit (300A,00B3) CS 1
#[rustfmt::skip]
pub const PRIMARY_DOSIMETER_UNIT: Tag = Tag(0x300A, 0x00B3);
/// SourceAxisDistance (300A,00B4) DS 1
#[rustfmt::skip]
pub const SOURCE_AXIS_DISTANCE: Tag = Tag(0x300A, 0x00B4);
/// BeamLimitingDeviceSequence (300A,00B6) SQ 1
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x00B6);
/// RTBeamLimitingDeviceType (300A,00B8) CS 1
#[rustfmt::skip]
pub const RT_BEAM_LIMITING_DEVICE_TYPE: Tag = Tag(0x300A, 0x00B8);
/// SourceToBeamLimitingDeviceDistance (300A,00BA) DS 1
#[rustfmt::skip]
pub const SOURCE_TO_BEAM_LIMITING_DEVICE_DISTANCE: Tag = Tag(0x300A, 0x00BA);
/// IsocenterToBeamLimitingDeviceDistance (300A,00BB) FL 1
#[rustfmt::skip]
pub const ISOCENTER_TO_BEAM_LIMITING_DEVICE_DISTANCE: Tag = Tag(0x300A, 0x00BB);
/// NumberOfLeafJawPairs (300A,00BC) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_LEAF_JAW_PAIRS: Tag = Tag(0x300A, 0x00BC);
/// LeafPositionBoundaries (300A,00BE) DS 3-n
#[rustfmt::skip]
pub const LEAF_POSITION_BOUNDARIES: Tag = Tag(0x300A, 0x00BE);
/// BeamNumber (300A,00C0) IS 1
#[rustfmt::skip]
pub const BEAM_NUMBER: Tag = Tag(0x300A, 0x00C0);
/// BeamName (300A,00C2) LO 1
#[rustfmt::skip]
pub const BEAM_NAME: Tag = Tag(0x300A, 0x00C2);
/// BeamDescription (300A,00C3) ST 1
#[rustfmt::skip]
pub const BEAM_DESCRIPTION: Tag = Tag(0x300A, 0x00C3);
/// BeamType (300A,00C4) CS 1
#[rustfmt::skip]
pub const BEAM_TYPE: Tag = Tag(0x300A, 0x00C4);
/// RadiationType (300A,00C6) CS 1
#[rustfmt::skip]
pub const RADIATION_TYPE: Tag = Tag(0x300A, 0x00C6);
/// HighDoseTechniqueType (300A,00C7) CS 1
#[rustfmt::skip]
pub const HIGH_DOSE_TECHNIQUE_TYPE: Tag = Tag(0x300A, 0x00C7);
/// ReferenceImageNumber (300A,00C8) IS 1
#[rustfmt::skip]
pub const REFERENCE_IMAGE_NUMBER: Tag = Tag(0x300A, 0x00C8);
/// PlannedVerificationImageSequence (300A,00CA) SQ 1
#[rustfmt::skip]
pub const PLANNED_VERIFICATION_IMAGE_SEQUENCE: Tag = Tag(0x300A, 0x00CA);
/// ImagingDeviceSpecificAcquisitionParameters (300A,00CC) LO 1-n
#[rustfmt::skip]
pub const IMAGING_DEVICE_SPECIFIC_ACQUISITION_PARAMETERS: Tag = Tag(0x300A, 0x00CC);
/// TreatmentDeliveryType (300A,00CE) CS 1
#[rustfmt::skip]
pub const TREATMENT_DELIVERY_TYPE: Tag = Tag(0x300A, 0x00CE);
/// NumberOfWedges (300A,00D0) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_WEDGES: Tag = Tag(0x300A, 0x00D0);
/// WedgeSequence (300A,00D1) SQ 1
#[rustfmt::skip]
pub const WEDGE_SEQUENCE: Tag = Tag(0x300A, 0x00D1);
/// WedgeNumber (300A,00D2) IS 1
#[rustfmt::skip]
pub const WEDGE_NUMBER: Tag = Tag(0x300A, 0x00D2);
/// WedgeType (300A,00D3) CS 1
#[rustfmt::skip]
pub const WEDGE_TYPE: Tag = Tag(0x300A, 0x00D3);
/// WedgeID (300A,00D4) SH 1
#[rustfmt::skip]
pub const WEDGE_ID: Tag = Tag(0x300A, 0x00D4);
/// WedgeAngle (300A,00D5) IS 1
#[rustfmt::skip]
pub const WEDGE_ANGLE: Tag = Tag(0x300A, 0x00D5);
/// WedgeFactor (300A,00D6) DS 1
#[rustfmt::skip]
pub const WEDGE_FACTOR: Tag = Tag(0x300A, 0x00D6);
/// WedgeOrientation (300A,00D8) DS 1
#[rustfmt::skip]
pub const WEDGE_ORIENTATION: Tag = Tag(0x300A, 0x00D8);
/// SourceToWedgeTrayDistance (300A,00DA) DS 1
#[rustfmt::skip]
pub const SOURCE_TO_WEDGE_TRAY_DISTANCE: Tag = Tag(0x300A, 0x00DA);
/// NumberOfCompensators (300A,00E0) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_COMPENSATORS: Tag = Tag(0x300A, 0x00E0);
/// MaterialID (300A,00E1) SH 1
#[rustfmt::skip]
pub const MATERIAL_ID: Tag = Tag(0x300A, 0x00E1);
/// TotalCompensatorTrayFactor (300A,00E2) DS 1
#[rustfmt::skip]
pub const TOTAL_COMPENSATOR_TRAY_FACTOR: Tag = Tag(0x300A, 0x00E2);
/// CompensatorSequence (300A,00E3) SQ 1
#[rustfmt::skip]
pub const COMPENSATOR_SEQUENCE: Tag = Tag(0x300A, 0x00E3);
/// CompensatorNumber (300A,00E4) IS 1
#[rustfmt::skip]
pub const COMPENSATOR_NUMBER: Tag = Tag(0x300A, 0x00E4);
/// CompensatorID (300A,00E5) SH 1
#[rustfmt::skip]
pub const COMPENSATOR_ID: Tag = Tag(0x300A, 0x00E5);
/// SourceToCompensatorTrayDistance (300A,00E6) DS 1
#[rustfmt::skip]
pub const SOURCE_TO_COMPENSATOR_TRAY_DISTANCE: Tag = Tag(0x300A, 0x00E6);
/// CompensatorRows (300A,00E7) IS 1
#[rustfmt::skip]
pub const COMPENSATOR_ROWS: Tag = Tag(0x300A, 0x00E7);
/// CompensatorColumns (300A,00E8) IS 1
#[rustfmt::skip]
pub const COMPENSATOR_COLUMNS: Tag = Tag(0x300A, 0x00E8);
/// CompensatorPixelSpacing (300A,00E9) DS 2
#[rustfmt::skip]
pub const COMPENSATOR_PIXEL_SPACING: Tag = Tag(0x300A, 0x00E9);
/// CompensatorPosition (300A,00EA) DS 2
#[rustfmt::skip]
pub const COMPENSATOR_POSITION: Tag = Tag(0x300A, 0x00EA);
/// CompensatorTransmissionData (300A,00EB) DS 1-n
#[rustfmt::skip]
pub const COMPENSATOR_TRANSMISSION_DATA: Tag = Tag(0x300A, 0x00EB);
/// CompensatorThicknessData (300A,00EC) DS 1-n
#[rustfmt::skip]
pub const COMPENSATOR_THICKNESS_DATA: Tag = Tag(0x300A, 0x00EC);
/// NumberOfBoli (300A,00ED) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_BOLI: Tag = Tag(0x300A, 0x00ED);
/// CompensatorType (300A,00EE) CS 1
#[rustfmt::skip]
pub const COMPENSATOR_TYPE: Tag = Tag(0x300A, 0x00EE);
/// NumberOfBlocks (300A,00F0) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_BLOCKS: Tag = Tag(0x300A, 0x00F0);
/// TotalBlockTrayFactor (300A,00F2) DS 1
#[rustfmt::skip]
pub const TOTAL_BLOCK_TRAY_FACTOR: Tag = Tag(0x300A, 0x00F2);
/// BlockSequence (300A,00F4) SQ 1
#[rustfmt::skip]
pub const BLOCK_SEQUENCE: Tag = Tag(0x300A, 0x00F4);
/// BlockTrayID (300A,00F5) SH 1
#[rustfmt::skip]
pub const BLOCK_TRAY_ID: Tag = Tag(0x300A, 0x00F5);
/// SourceToBlockTrayDistance (300A,00F6) DS 1
#[rustfmt::skip]
pub const SOURCE_TO_BLOCK_TRAY_DISTANCE: Tag = Tag(0x300A, 0x00F6);
/// BlockType (300A,00F8) CS 1
#[rustfmt::skip]
pub const BLOCK_TYPE: Tag = Tag(0x300A, 0x00F8);
/// BlockDivergence (300A,00FA) CS 1
#[rustfmt::skip]
pub const BLOCK_DIVERGENCE: Tag = Tag(0x300A, 0x00FA);
/// BlockMountingPosition (300A,00FB) CS 1
#[rustfmt::skip]
pub const BLOCK_MOUNTING_POSITION: Tag = Tag(0x300A, 0x00FB);
/// BlockNumber (300A,00FC) IS 1
#[rustfmt::skip]
pub const BLOCK_NUMBER: Tag = Tag(0x300A, 0x00FC);
/// BlockName (300A,00FE) LO 1
#[rustfmt::skip]
pub const BLOCK_NAME: Tag = Tag(0x300A, 0x00FE);
/// BlockThickness (300A,0100) DS 1
#[rustfmt::skip]
pub const BLOCK_THICKNESS: Tag = Tag(0x300A, 0x0100);
/// BlockTransmission (300A,0102) DS 1
#[rustfmt::skip]
pub const BLOCK_TRANSMISSION: Tag = Tag(0x300A, 0x0102);
/// BlockNumberOfPoints (300A,0104) IS 1
#[rustfmt::skip]
pub const BLOCK_NUMBER_OF_POINTS: Tag = Tag(0x300A, 0x0104);
/// BlockData (300A,0106) DS 2-2n
#[rustfmt::skip]
pub const BLOCK_DATA: Tag = Tag(0x300A, 0x0106);
/// ApplicatorSequence (300A,0107) SQ 1
#[rustfmt::skip]
pub const APPLICATOR_SEQUENCE: Tag = Tag(0x300A, 0x0107);
/// ApplicatorID (300A,0108) SH 1
#[rustfmt::skip]
pub const APPLICATOR_ID: Tag = Tag(0x300A, 0x0108);
/// ApplicatorType (300A,0109) CS 1
#[rustfmt::skip]
pub const APPLICATOR_TYPE: Tag = Tag(0x300A, 0x0109);
/// ApplicatorDescription (300A,010A) LO 1
#[rustfmt::skip]
pub const APPLICATOR_DESCRIPTION: Tag = Tag(0x300A, 0x010A);
/// CumulativeDoseReferenceCoefficient (300A,010C) DS 1
#[rustfmt::skip]
pub const CUMULATIVE_DOSE_REFERENCE_COEFFICIENT: Tag = Tag(0x300A, 0x010C);
/// FinalCumulativeMetersetWeight (300A,010E) DS 1
#[rustfmt::skip]
pub const FINAL_CUMULATIVE_METERSET_WEIGHT: Tag = Tag(0x300A, 0x010E);
/// NumberOfControlPoints (300A,0110) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_CONTROL_POINTS: Tag = Tag(0x300A, 0x0110);
/// ControlPointSequence (300A,0111) SQ 1
#[rustfmt::skip]
pub const CONTROL_POINT_SEQUENCE: Tag = Tag(0x300A, 0x0111);
/// ControlPointIndex (300A,0112) IS 1
#[rustfmt::skip]
pub const CONTROL_POINT_INDEX: Tag = Tag(0x300A, 0x0112);
/// NominalBeamEnergy (300A,0114) DS 1
#[rustfmt::skip]
pub const NOMINAL_BEAM_ENERGY: Tag = Tag(0x300A, 0x0114);
/// DoseRateSet (300A,0115) DS 1
#[rustfmt::skip]
pub const DOSE_RATE_SET: Tag = Tag(0x300A, 0x0115);
/// WedgePositionSequence (300A,0116) SQ 1
#[rustfmt::skip]
pub const WEDGE_POSITION_SEQUENCE: Tag = Tag(0x300A, 0x0116);
/// WedgePosition (300A,0118) CS 1
#[rustfmt::skip]
pub const WEDGE_POSITION: Tag = Tag(0x300A, 0x0118);
/// BeamLimitingDevicePositionSequence (300A,011A) SQ 1
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_POSITION_SEQUENCE: Tag = Tag(0x300A, 0x011A);
/// LeafJawPositions (300A,011C) DS 2-2n
#[rustfmt::skip]
pub const LEAF_JAW_POSITIONS: Tag = Tag(0x300A, 0x011C);
/// GantryAngle (300A,011E) DS 1
#[rustfmt::skip]
pub const GANTRY_ANGLE: Tag = Tag(0x300A, 0x011E);
/// GantryRotationDirection (300A,011F) CS 1
#[rustfmt::skip]
pub const GANTRY_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x011F);
/// BeamLimitingDeviceAngle (300A,0120) DS 1
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_ANGLE: Tag = Tag(0x300A, 0x0120);
/// BeamLimitingDeviceRotationDirection (300A,0121) CS 1
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x0121);
/// PatientSupportAngle (300A,0122) DS 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_ANGLE: Tag = Tag(0x300A, 0x0122);
/// PatientSupportRotationDirection (300A,0123) CS 1
#[rustfmt::skip]
pub const PATIENT_SUPPORT_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x0123);
/// TableTopEccentricAxisDistance (300A,0124) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_ECCENTRIC_AXIS_DISTANCE: Tag = Tag(0x300A, 0x0124);
/// TableTopEccentricAngle (300A,0125) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_ECCENTRIC_ANGLE: Tag = Tag(0x300A, 0x0125);
/// TableTopEccentricRotationDirection (300A,0126) CS 1
#[rustfmt::skip]
pub const TABLE_TOP_ECCENTRIC_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x0126);
/// TableTopVerticalPosition (300A,0128) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_VERTICAL_POSITION: Tag = Tag(0x300A, 0x0128);
/// TableTopLongitudinalPosition (300A,0129) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_LONGITUDINAL_POSITION: Tag = Tag(0x300A, 0x0129);
/// TableTopLateralPosition (300A,012A) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_LATERAL_POSITION: Tag = Tag(0x300A, 0x012A);
/// IsocenterPosition (300A,012C) DS 3
#[rustfmt::skip]
pub const ISOCENTER_POSITION: Tag = Tag(0x300A, 0x012C);
/// SurfaceEntryPoint (300A,012E) DS 3
#[rustfmt::skip]
pub const SURFACE_ENTRY_POINT: Tag = Tag(0x300A, 0x012E);
/// SourceToSurfaceDistance (300A,0130) DS 1
#[rustfmt::skip]
pub const SOURCE_TO_SURFACE_DISTANCE: Tag = Tag(0x300A, 0x0130);
/// CumulativeMetersetWeight (300A,0134) DS 1
#[rustfmt::skip]
pub const CUMULATIVE_METERSET_WEIGHT: Tag = Tag(0x300A, 0x0134);
/// TableTopPitchAngle (300A,0140) FL 1
#[rustfmt::skip]
pub const TABLE_TOP_PITCH_ANGLE: Tag = Tag(0x300A, 0x0140);
/// TableTopPitchRotationDirection (300A,0142) CS 1
#[rustfmt::skip]
pub const TABLE_TOP_PITCH_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x0142);
/// TableTopRollAngle (300A,0144) FL 1
#[rustfmt::skip]
pub const TABLE_TOP_ROLL_ANGLE: Tag = Tag(0x300A, 0x0144);
/// TableTopRollRotationDirection (300A,0146) CS 1
#[rustfmt::skip]
pub const TABLE_TOP_ROLL_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x0146);
/// PatientSetupSequence (300A,0180) SQ 1
#[rustfmt::skip]
pub const PATIENT_SETUP_SEQUENCE: Tag = Tag(0x300A, 0x0180);
/// PatientSetupNumber (300A,0182) IS 1
#[rustfmt::skip]
pub const PATIENT_SETUP_NUMBER: Tag = Tag(0x300A, 0x0182);
/// PatientSetupLabel (300A,0183) LO 1
#[rustfmt::skip]
pub const PATIENT_SETUP_LABEL: Tag = Tag(0x300A, 0x0183);
/// PatientAdditionalPosition (300A,0184) LO 1
#[rustfmt::skip]
pub const PATIENT_ADDITIONAL_POSITION: Tag = Tag(0x300A, 0x0184);
/// FixationDeviceSequence (300A,0190) SQ 1
#[rustfmt::skip]
pub const FIXATION_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x0190);
/// FixationDeviceType (300A,0192) CS 1
#[rustfmt::skip]
pub const FIXATION_DEVICE_TYPE: Tag = Tag(0x300A, 0x0192);
/// FixationDeviceLabel (300A,0194) SH 1
#[rustfmt::skip]
pub const FIXATION_DEVICE_LABEL: Tag = Tag(0x300A, 0x0194);
/// FixationDeviceDescription (300A,0196) ST 1
#[rustfmt::skip]
pub const FIXATION_DEVICE_DESCRIPTION: Tag = Tag(0x300A, 0x0196);
/// FixationDevicePosition (300A,0198) SH 1
#[rustfmt::skip]
pub const FIXATION_DEVICE_POSITION: Tag = Tag(0x300A, 0x0198);
/// ShieldingDeviceSequence (300A,01A0) SQ 1
#[rustfmt::skip]
pub const SHIELDING_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x01A0);
/// ShieldingDeviceType (300A,01A2) CS 1
#[rustfmt::skip]
pub const SHIELDING_DEVICE_TYPE: Tag = Tag(0x300A, 0x01A2);
/// ShieldingDeviceLabel (300A,01A4) SH 1
#[rustfmt::skip]
pub const SHIELDING_DEVICE_LABEL: Tag = Tag(0x300A, 0x01A4);
/// ShieldingDeviceDescription (300A,01A6) ST 1
#[rustfmt::skip]
pub const SHIELDING_DEVICE_DESCRIPTION: Tag = Tag(0x300A, 0x01A6);
/// ShieldingDevicePosition (300A,01A8) SH 1
#[rustfmt::skip]
pub const SHIELDING_DEVICE_POSITION: Tag = Tag(0x300A, 0x01A8);
/// SetupTechnique (300A,01B0) CS 1
#[rustfmt::skip]
pub const SETUP_TECHNIQUE: Tag = Tag(0x300A, 0x01B0);
/// SetupTechniqueDescription (300A,01B2) ST 1
#[rustfmt::skip]
pub const SETUP_TECHNIQUE_DESCRIPTION: Tag = Tag(0x300A, 0x01B2);
/// SetupDeviceSequence (300A,01B4) SQ 1
#[rustfmt::skip]
pub const SETUP_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x01B4);
/// SetupDeviceType (300A,01B6) CS 1
#[rustfmt::skip]
pub const SETUP_DEVICE_TYPE: Tag = Tag(0x300A, 0x01B6);
/// SetupDeviceLabel (300A,01B8) SH 1
#[rustfmt::skip]
pub const SETUP_DEVICE_LABEL: Tag = Tag(0x300A, 0x01B8);
/// SetupDeviceDescription (300A,01BA) ST 1
#[rustfmt::skip]
pub const SETUP_DEVICE_DESCRIPTION: Tag = Tag(0x300A, 0x01BA);
/// SetupDeviceParameter (300A,01BC) DS 1
#[rustfmt::skip]
pub const SETUP_DEVICE_PARAMETER: Tag = Tag(0x300A, 0x01BC);
/// SetupReferenceDescription (300A,01D0) ST 1
#[rustfmt::skip]
pub const SETUP_REFERENCE_DESCRIPTION: Tag = Tag(0x300A, 0x01D0);
/// TableTopVerticalSetupDisplacement (300A,01D2) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_VERTICAL_SETUP_DISPLACEMENT: Tag = Tag(0x300A, 0x01D2);
/// TableTopLongitudinalSetupDisplacement (300A,01D4) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_LONGITUDINAL_SETUP_DISPLACEMENT: Tag = Tag(0x300A, 0x01D4);
/// TableTopLateralSetupDisplacement (300A,01D6) DS 1
#[rustfmt::skip]
pub const TABLE_TOP_LATERAL_SETUP_DISPLACEMENT: Tag = Tag(0x300A, 0x01D6);
/// BrachyTreatmentTechnique (300A,0200) CS 1
#[rustfmt::skip]
pub const BRACHY_TREATMENT_TECHNIQUE: Tag = Tag(0x300A, 0x0200);
/// BrachyTreatmentType (300A,0202) CS 1
#[rustfmt::skip]
pub const BRACHY_TREATMENT_TYPE: Tag = Tag(0x300A, 0x0202);
/// TreatmentMachineSequence (300A,0206) SQ 1
#[rustfmt::skip]
pub const TREATMENT_MACHINE_SEQUENCE: Tag = Tag(0x300A, 0x0206);
/// SourceSequence (300A,0210) SQ 1
#[rustfmt::skip]
pub const SOURCE_SEQUENCE: Tag = Tag(0x300A, 0x0210);
/// SourceNumber (300A,0212) IS 1
#[rustfmt::skip]
pub const SOURCE_NUMBER: Tag = Tag(0x300A, 0x0212);
/// SourceType (300A,0214) CS 1
#[rustfmt::skip]
pub const SOURCE_TYPE: Tag = Tag(0x300A, 0x0214);
/// SourceManufacturer (300A,0216) LO 1
#[rustfmt::skip]
pub const SOURCE_MANUFACTURER: Tag = Tag(0x300A, 0x0216);
/// ActiveSourceDiameter (300A,0218) DS 1
#[rustfmt::skip]
pub const ACTIVE_SOURCE_DIAMETER: Tag = Tag(0x300A, 0x0218);
/// ActiveSourceLength (300A,021A) DS 1
#[rustfmt::skip]
pub const ACTIVE_SOURCE_LENGTH: Tag = Tag(0x300A, 0x021A);
/// SourceEncapsulationNominalThickness (300A,0222) DS 1
#[rustfmt::skip]
pub const SOURCE_ENCAPSULATION_NOMINAL_THICKNESS: Tag = Tag(0x300A, 0x0222);
/// SourceEncapsulationNominalTransmission (300A,0224) DS 1
#[rustfmt::skip]
pub const SOURCE_ENCAPSULATION_NOMINAL_TRANSMISSION: Tag = Tag(0x300A, 0x0224);
/// SourceIsotopeName (300A,0226) LO 1
#[rustfmt::skip]
pub const SOURCE_ISOTOPE_NAME: Tag = Tag(0x300A, 0x0226);
/// SourceIsotopeHalfLife (300A,0228) DS 1
#[rustfmt::skip]
pub const SOURCE_ISOTOPE_HALF_LIFE: Tag = Tag(0x300A, 0x0228);
/// SourceStrengthUnits (300A,0229) CS 1
#[rustfmt::skip]
pub const SOURCE_STRENGTH_UNITS: Tag = Tag(0x300A, 0x0229);
/// ReferenceAirKermaRate (300A,022A) DS 1
#[rustfmt::skip]
pub const REFERENCE_AIR_KERMA_RATE: Tag = Tag(0x300A, 0x022A);
/// SourceStrength (300A,022B) DS 1
#[rustfmt::skip]
pub const SOURCE_STRENGTH: Tag = Tag(0x300A, 0x022B);
/// SourceStrengthReferenceDate (300A,022C) DA 1
#[rustfmt::skip]
pub const SOURCE_STRENGTH_REFERENCE_DATE: Tag = Tag(0x300A, 0x022C);
/// SourceStrengthReferenceTime (300A,022E) TM 1
#[rustfmt::skip]
pub const SOURCE_STRENGTH_REFERENCE_TIME: Tag = Tag(0x300A, 0x022E);
/// ApplicationSetupSequence (300A,0230) SQ 1
#[rustfmt::skip]
pub const APPLICATION_SETUP_SEQUENCE: Tag = Tag(0x300A, 0x0230);
/// ApplicationSetupType (300A,0232) CS 1
#[rustfmt::skip]
pub const APPLICATION_SETUP_TYPE: Tag = Tag(0x300A, 0x0232);
/// ApplicationSetupNumber (300A,0234) IS 1
#[rustfmt::skip]
pub const APPLICATION_SETUP_NUMBER: Tag = Tag(0x300A, 0x0234);
/// ApplicationSetupName (300A,0236) LO 1
#[rustfmt::skip]
pub const APPLICATION_SETUP_NAME: Tag = Tag(0x300A, 0x0236);
/// ApplicationSetupManufacturer (300A,0238) LO 1
#[rustfmt::skip]
pub const APPLICATION_SETUP_MANUFACTURER: Tag = Tag(0x300A, 0x0238);
/// TemplateNumber (300A,0240) IS 1
#[rustfmt::skip]
pub const TEMPLATE_NUMBER: Tag = Tag(0x300A, 0x0240);
/// TemplateType (300A,0242) SH 1
#[rustfmt::skip]
pub const TEMPLATE_TYPE: Tag = Tag(0x300A, 0x0242);
/// TemplateName (300A,0244) LO 1
#[rustfmt::skip]
pub const TEMPLATE_NAME: Tag = Tag(0x300A, 0x0244);
/// TotalReferenceAirKerma (300A,0250) DS 1
#[rustfmt::skip]
pub const TOTAL_REFERENCE_AIR_KERMA: Tag = Tag(0x300A, 0x0250);
/// BrachyAccessoryDeviceSequence (300A,0260) SQ 1
#[rustfmt::skip]
pub const BRACHY_ACCESSORY_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x0260);
/// BrachyAccessoryDeviceNumber (300A,0262) IS 1
#[rustfmt::skip]
pub const BRACHY_ACCESSORY_DEVICE_NUMBER: Tag = Tag(0x300A, 0x0262);
/// BrachyAccessoryDeviceID (300A,0263) SH 1
#[rustfmt::skip]
pub const BRACHY_ACCESSORY_DEVICE_ID: Tag = Tag(0x300A, 0x0263);
/// BrachyAccessoryDeviceType (300A,0264) CS 1
#[rustfmt::skip]
pub const BRACHY_ACCESSORY_DEVICE_TYPE: Tag = Tag(0x300A, 0x0264);
/// BrachyAccessoryDeviceName (300A,0266) LO 1
#[rustfmt::skip]
pub const BRACHY_ACCESSORY_DEVICE_NAME: Tag = Tag(0x300A, 0x0266);
/// BrachyAccessoryDeviceNominalThickness (300A,026A) DS 1
#[rustfmt::skip]
pub const BRACHY_ACCESSORY_DEVICE_NOMINAL_THICKNESS: Tag = Tag(0x300A, 0x026A);
/// BrachyAccessoryDeviceNominalTransmission (300A,026C) DS 1
#[rustfmt::skip]
pub const BRACHY_ACCESSORY_DEVICE_NOMINAL_TRANSMISSION: Tag = Tag(0x300A, 0x026C);
/// ChannelSequence (300A,0280) SQ 1
#[rustfmt::skip]
pub const CHANNEL_SEQUENCE: Tag = Tag(0x300A, 0x0280);
/// ChannelNumber (300A,0282) IS 1
#[rustfmt::skip]
pub const CHANNEL_NUMBER: Tag = Tag(0x300A, 0x0282);
/// ChannelLength (300A,0284) DS 1
#[rustfmt::skip]
pub const CHANNEL_LENGTH: Tag = Tag(0x300A, 0x0284);
/// ChannelTotalTime (300A,0286) DS 1
#[rustfmt::skip]
pub const CHANNEL_TOTAL_TIME: Tag = Tag(0x300A, 0x0286);
/// SourceMovementType (300A,0288) CS 1
#[rustfmt::skip]
pub const SOURCE_MOVEMENT_TYPE: Tag = Tag(0x300A, 0x0288);
/// NumberOfPulses (300A,028A) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_PULSES: Tag = Tag(0x300A, 0x028A);
/// PulseRepetitionInterval (300A,028C) DS 1
#[rustfmt::skip]
pub const PULSE_REPETITION_INTERVAL: Tag = Tag(0x300A, 0x028C);
/// SourceApplicatorNumber (300A,0290) IS 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_NUMBER: Tag = Tag(0x300A, 0x0290);
/// SourceApplicatorID (300A,0291) SH 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_ID: Tag = Tag(0x300A, 0x0291);
/// SourceApplicatorType (300A,0292) CS 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_TYPE: Tag = Tag(0x300A, 0x0292);
/// SourceApplicatorName (300A,0294) LO 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_NAME: Tag = Tag(0x300A, 0x0294);
/// SourceApplicatorLength (300A,0296) DS 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_LENGTH: Tag = Tag(0x300A, 0x0296);
/// SourceApplicatorManufacturer (300A,0298) LO 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_MANUFACTURER: Tag = Tag(0x300A, 0x0298);
/// SourceApplicatorWallNominalThickness (300A,029C) DS 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_WALL_NOMINAL_THICKNESS: Tag = Tag(0x300A, 0x029C);
/// SourceApplicatorWallNominalTransmission (300A,029E) DS 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_WALL_NOMINAL_TRANSMISSION: Tag = Tag(0x300A, 0x029E);
/// SourceApplicatorStepSize (300A,02A0) DS 1
#[rustfmt::skip]
pub const SOURCE_APPLICATOR_STEP_SIZE: Tag = Tag(0x300A, 0x02A0);
/// TransferTubeNumber (300A,02A2) IS 1
#[rustfmt::skip]
pub const TRANSFER_TUBE_NUMBER: Tag = Tag(0x300A, 0x02A2);
/// TransferTubeLength (300A,02A4) DS 1
#[rustfmt::skip]
pub const TRANSFER_TUBE_LENGTH: Tag = Tag(0x300A, 0x02A4);
/// ChannelShieldSequence (300A,02B0) SQ 1
#[rustfmt::skip]
pub const CHANNEL_SHIELD_SEQUENCE: Tag = Tag(0x300A, 0x02B0);
/// ChannelShieldNumber (300A,02B2) IS 1
#[rustfmt::skip]
pub const CHANNEL_SHIELD_NUMBER: Tag = Tag(0x300A, 0x02B2);
/// ChannelShieldID (300A,02B3) SH 1
#[rustfmt::skip]
pub const CHANNEL_SHIELD_ID: Tag = Tag(0x300A, 0x02B3);
/// ChannelShieldName (300A,02B4) LO 1
#[rustfmt::skip]
pub const CHANNEL_SHIELD_NAME: Tag = Tag(0x300A, 0x02B4);
/// ChannelShieldNominalThickness (300A,02B8) DS 1
#[rustfmt::skip]
pub const CHANNEL_SHIELD_NOMINAL_THICKNESS: Tag = Tag(0x300A, 0x02B8);
/// ChannelShieldNominalTransmission (300A,02BA) DS 1
#[rustfmt::skip]
pub const CHANNEL_SHIELD_NOMINAL_TRANSMISSION: Tag = Tag(0x300A, 0x02BA);
/// FinalCumulativeTimeWeight (300A,02C8) DS 1
#[rustfmt::skip]
pub const FINAL_CUMULATIVE_TIME_WEIGHT: Tag = Tag(0x300A, 0x02C8);
/// BrachyControlPointSequence (300A,02D0) SQ 1
#[rustfmt::skip]
pub const BRACHY_CONTROL_POINT_SEQUENCE: Tag = Tag(0x300A, 0x02D0);
/// ControlPointRelativePosition (300A,02D2) DS 1
#[rustfmt::skip]
pub const CONTROL_POINT_RELATIVE_POSITION: Tag = Tag(0x300A, 0x02D2);
/// ControlPoint3DPosition (300A,02D4) DS 3
#[rustfmt::skip]
pub const CONTROL_POINT3_D_POSITION: Tag = Tag(0x300A, 0x02D4);
/// CumulativeTimeWeight (300A,02D6) DS 1
#[rustfmt::skip]
pub const CUMULATIVE_TIME_WEIGHT: Tag = Tag(0x300A, 0x02D6);
/// ReferencedRTPlanSequence (300C,0002) SQ 1
#[rustfmt::skip]
pub const REFERENCED_RT_PLAN_SEQUENCE: Tag = Tag(0x300C, 0x0002);
/// ReferencedBeamSequence (300C,0004) SQ 1
#[rustfmt::skip]
pub const REFERENCED_BEAM_SEQUENCE: Tag = Tag(0x300C, 0x0004);
/// ReferencedBeamNumber (300C,0006) IS 1
#[rustfmt::skip]
pub const REFERENCED_BEAM_NUMBER: Tag = Tag(0x300C, 0x0006);
/// ReferencedReferenceImageNumber (300C,0007) IS 1
#[rustfmt::skip]
pub const REFERENCED_REFERENCE_IMAGE_NUMBER: Tag = Tag(0x300C, 0x0007);
/// StartCumulativeMetersetWeight (300C,0008) DS 1
#[rustfmt::skip]
pub const START_CUMULATIVE_METERSET_WEIGHT: Tag = Tag(0x300C, 0x0008);
/// EndCumulativeMetersetWeight (300C,0009) DS 1
#[rustfmt::skip]
pub const END_CUMULATIVE_METERSET_WEIGHT: Tag = Tag(0x300C, 0x0009);
/// ReferencedBrachyApplicationSetupSequence (300C,000A) SQ 1
#[rustfmt::skip]
pub const REFERENCED_BRACHY_APPLICATION_SETUP_SEQUENCE: Tag = Tag(0x300C, 0x000A);
/// ReferencedBrachyApplicationSetupNumber (300C,000C) IS 1
#[rustfmt::skip]
pub const REFERENCED_BRACHY_APPLICATION_SETUP_NUMBER: Tag = Tag(0x300C, 0x000C);
/// ReferencedSourceNumber (300C,000E) IS 1
#[rustfmt::skip]
pub const REFERENCED_SOURCE_NUMBER: Tag = Tag(0x300C, 0x000E);
/// ReferencedFractionGroupSequence (300C,0020) SQ 1
#[rustfmt::skip]
pub const REFERENCED_FRACTION_GROUP_SEQUENCE: Tag = Tag(0x300C, 0x0020);
/// ReferencedFractionGroupNumber (300C,0022) IS 1
#[rustfmt::skip]
pub const REFERENCED_FRACTION_GROUP_NUMBER: Tag = Tag(0x300C, 0x0022);
/// ReferencedVerificationImageSequence (300C,0040) SQ 1
#[rustfmt::skip]
pub const REFERENCED_VERIFICATION_IMAGE_SEQUENCE: Tag = Tag(0x300C, 0x0040);
/// ReferencedReferenceImageSequence (300C,0042) SQ 1
#[rustfmt::skip]
pub const REFERENCED_REFERENCE_IMAGE_SEQUENCE: Tag = Tag(0x300C, 0x0042);
/// ReferencedDoseReferenceSequence (300C,0050) SQ 1
#[rustfmt::skip]
pub const REFERENCED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x300C, 0x0050);
/// ReferencedDoseReferenceNumber (300C,0051) IS 1
#[rustfmt::skip]
pub const REFERENCED_DOSE_REFERENCE_NUMBER: Tag = Tag(0x300C, 0x0051);
/// BrachyReferencedDoseReferenceSequence (300C,0055) SQ 1
#[rustfmt::skip]
pub const BRACHY_REFERENCED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x300C, 0x0055);
/// ReferencedStructureSetSequence (300C,0060) SQ 1
#[rustfmt::skip]
pub const REFERENCED_STRUCTURE_SET_SEQUENCE: Tag = Tag(0x300C, 0x0060);
/// ReferencedPatientSetupNumber (300C,006A) IS 1
#[rustfmt::skip]
pub const REFERENCED_PATIENT_SETUP_NUMBER: Tag = Tag(0x300C, 0x006A);
/// ReferencedDoseSequence (300C,0080) SQ 1
#[rustfmt::skip]
pub const REFERENCED_DOSE_SEQUENCE: Tag = Tag(0x300C, 0x0080);
/// ReferencedToleranceTableNumber (300C,00A0) IS 1
#[rustfmt::skip]
pub const REFERENCED_TOLERANCE_TABLE_NUMBER: Tag = Tag(0x300C, 0x00A0);
/// ReferencedBolusSequence (300C,00B0) SQ 1
#[rustfmt::skip]
pub const REFERENCED_BOLUS_SEQUENCE: Tag = Tag(0x300C, 0x00B0);
/// ReferencedWedgeNumber (300C,00C0) IS 1
#[rustfmt::skip]
pub const REFERENCED_WEDGE_NUMBER: Tag = Tag(0x300C, 0x00C0);
/// ReferencedCompensatorNumber (300C,00D0) IS 1
#[rustfmt::skip]
pub const REFERENCED_COMPENSATOR_NUMBER: Tag = Tag(0x300C, 0x00D0);
/// ReferencedBlockNumber (300C,00E0) IS 1
#[rustfmt::skip]
pub const REFERENCED_BLOCK_NUMBER: Tag = Tag(0x300C, 0x00E0);
/// ReferencedControlPointIndex (300C,00F0) IS 1
#[rustfmt::skip]
pub const REFERENCED_CONTROL_POINT_INDEX: Tag = Tag(0x300C, 0x00F0);
/// ReferencedControlPointSequence (300C,00F2) SQ 1
#[rustfmt::skip]
pub const REFERENCED_CONTROL_POINT_SEQUENCE: Tag = Tag(0x300C, 0x00F2);
/// ReferencedStartControlPointIndex (300C,00F4) IS 1
#[rustfmt::skip]
pub const REFERENCED_START_CONTROL_POINT_INDEX: Tag = Tag(0x300C, 0x00F4);
/// ReferencedStopControlPointIndex (300C,00F6) IS 1
#[rustfmt::skip]
pub const REFERENCED_STOP_CONTROL_POINT_INDEX: Tag = Tag(0x300C, 0x00F6);
/// ReferencedRangeShifterNumber (300C,0100) IS 1
#[rustfmt::skip]
pub const REFERENCED_RANGE_SHIFTER_NUMBER: Tag = Tag(0x300C, 0x0100);
/// ReferencedLateralSpreadingDeviceNumber (300C,0102) IS 1
#[rustfmt::skip]
pub const REFERENCED_LATERAL_SPREADING_DEVICE_NUMBER: Tag = Tag(0x300C, 0x0102);
/// ReferencedRangeModulatorNumber (300C,0104) IS 1
#[rustfmt::skip]
pub const REFERENCED_RANGE_MODULATOR_NUMBER: Tag = Tag(0x300C, 0x0104);
/// ApprovalStatus (300E,0002) CS 1
#[rustfmt::skip]
pub const APPROVAL_STATUS: Tag = Tag(0x300E, 0x0002);
/// ReviewDate (300E,0004) DA 1
#[rustfmt::skip]
pub const REVIEW_DATE: Tag = Tag(0x300E, 0x0004);
/// ReviewTime (300E,0005) TM 1
#[rustfmt::skip]
pub const REVIEW_TIME: Tag = Tag(0x300E, 0x0005);
/// ReviewerName (300E,0008) PN 1
#[rustfmt::skip]
pub const REVIEWER_NAME: Tag = Tag(0x300E, 0x0008);
/// Arbitrary (4000,0010) LT 1
#[rustfmt::skip]
pub const ARBITRARY: Tag = Tag(0x4000, 0x0010);
/// TextComments (4000,4000) LT 1
#[rustfmt::skip]
pub const TEXT_COMMENTS: Tag = Tag(0x4000, 0x4000);
/// ResultsID (4008,0040) SH 1
#[rustfmt::skip]
pub const RESULTS_ID: Tag = Tag(0x4008, 0x0040);
/// ResultsIDIssuer (4008,0042) LO 1
#[rustfmt::skip]
pub const RESULTS_ID_ISSUER: Tag = Tag(0x4008, 0x0042);
/// ReferencedInterpretationSequence (4008,0050) SQ 1
#[rustfmt::skip]
pub const REFERENCED_INTERPRETATION_SEQUENCE: Tag = Tag(0x4008, 0x0050);
/// InterpretationRecordedDate (4008,0100) DA 1
#[rustfmt::skip]
pub const INTERPRETATION_RECORDED_DATE: Tag = Tag(0x4008, 0x0100);
/// InterpretationRecordedTime (4008,0101) TM 1
#[rustfmt::skip]
pub const INTERPRETATION_RECORDED_TIME: Tag = Tag(0x4008, 0x0101);
/// InterpretationRecorder (4008,0102) PN 1
#[rustfmt::skip]
pub const INTERPRETATION_RECORDER: Tag = Tag(0x4008, 0x0102);
/// ReferenceToRecordedSound (4008,0103) LO 1
#[rustfmt::skip]
pub const REFERENCE_TO_RECORDED_SOUND: Tag = Tag(0x4008, 0x0103);
/// InterpretationTranscriptionDate (4008,0108) DA 1
#[rustfmt::skip]
pub const INTERPRETATION_TRANSCRIPTION_DATE: Tag = Tag(0x4008, 0x0108);
/// InterpretationTranscriptionTime (4008,0109) TM 1
#[rustfmt::skip]
pub const INTERPRETATION_TRANSCRIPTION_TIME: Tag = Tag(0x4008, 0x0109);
/// InterpretationTranscriber (4008,010A) PN 1
#[rustfmt::skip]
pub const INTERPRETATION_TRANSCRIBER: Tag = Tag(0x4008, 0x010A);
/// InterpretationText (4008,010B) ST 1
#[rustfmt::skip]
pub const INTERPRETATION_TEXT: Tag = Tag(0x4008, 0x010B);
/// InterpretationAuthor (4008,010C) PN 1
#[rustfmt::skip]
pub const INTERPRETATION_AUTHOR: Tag = Tag(0x4008, 0x010C);
/// InterpretationApproverSequence (4008,0111) SQ 1
#[rustfmt::skip]
pub const INTERPRETATION_APPROVER_SEQUENCE: Tag = Tag(0x4008, 0x0111);
/// InterpretationApprovalDate (4008,0112) DA 1
#[rustfmt::skip]
pub const INTERPRETATION_APPROVAL_DATE: Tag = Tag(0x4008, 0x0112);
/// InterpretationApprovalTime (4008,0113) TM 1
#[rustfmt::skip]
pub const INTERPRETATION_APPROVAL_TIME: Tag = Tag(0x4008, 0x0113);
/// PhysicianApprovingInterpretation (4008,0114) PN 1
#[rustfmt::skip]
pub const PHYSICIAN_APPROVING_INTERPRETATION: Tag = Tag(0x4008, 0x0114);
/// InterpretationDiagnosisDescription (4008,0115) LT 1
#[rustfmt::skip]
pub const INTERPRETATION_DIAGNOSIS_DESCRIPTION: Tag = Tag(0x4008, 0x0115);
/// InterpretationDiagnosisCodeSequence (4008,0117) SQ 1
#[rustfmt::skip]
pub const INTERPRETATION_DIAGNOSIS_CODE_SEQUENCE: Tag = Tag(0x4008, 0x0117);
/// ResultsDistributionListSequence (4008,0118) SQ 1
#[rustfmt::skip]
pub const RESULTS_DISTRIBUTION_LIST_SEQUENCE: Tag = Tag(0x4008, 0x0118);
/// DistributionName (4008,0119) PN 1
#[rustfmt::skip]
pub const DISTRIBUTION_NAME: Tag = Tag(0x4008, 0x0119);
/// DistributionAddress (4008,011A) LO 1
#[rustfmt::skip]
pub const DISTRIBUTION_ADDRESS: Tag = Tag(0x4008, 0x011A);
/// InterpretationID (4008,0200) SH 1
#[rustfmt::skip]
pub const INTERPRETATION_ID: Tag = Tag(0x4008, 0x0200);
/// InterpretationIDIssuer (4008,0202) LO 1
#[rustfmt::skip]
pub const INTERPRETATION_ID_ISSUER: Tag = Tag(0x4008, 0x0202);
/// InterpretationTypeID (4008,0210) CS 1
#[rustfmt::skip]
pub const INTERPRETATION_TYPE_ID: Tag = Tag(0x4008, 0x0210);
/// InterpretationStatusID (4008,0212) CS 1
#[rustfmt::skip]
pub const INTERPRETATION_STATUS_ID: Tag = Tag(0x4008, 0x0212);
/// Impressions (4008,0300) ST 1
#[rustfmt::skip]
pub const IMPRESSIONS: Tag = Tag(0x4008, 0x0300);
/// ResultsComments (4008,4000) ST 1
#[rustfmt::skip]
pub const RESULTS_COMMENTS: Tag = Tag(0x4008, 0x4000);
/// CurveDimensions (50xx,0005) US 1
#[rustfmt::skip]
pub const CURVE_DIMENSIONS: Tag = Tag(0x5000, 0x0005);
/// NumberOfPoints (50xx,0010) US 1
#[rustfmt::skip]
pub const NUMBER_OF_POINTS: Tag = Tag(0x5000, 0x0010);
/// TypeOfData (50xx,0020) CS 1
#[rustfmt::skip]
pub const TYPE_OF_DATA: Tag = Tag(0x5000, 0x0020);
/// CurveDescription (50xx,0022) LO 1
#[rustfmt::skip]
pub const CURVE_DESCRIPTION: Tag = Tag(0x5000, 0x0022);
/// AxisUnits (50xx,0030) SH 1-n
#[rustfmt::skip]
pub const AXIS_UNITS: Tag = Tag(0x5000, 0x0030);
/// AxisLabels (50xx,0040) SH 1-n
#[rustfmt::skip]
pub const AXIS_LABELS: Tag = Tag(0x5000, 0x0040);
/// DataValueRepresentation (50xx,0103) US 1
#[rustfmt::skip]
pub const DATA_VALUE_REPRESENTATION: Tag = Tag(0x5000, 0x0103);
/// MinimumCoordinateValue (50xx,0104) US 1-n
#[rustfmt::skip]
pub const MINIMUM_COORDINATE_VALUE: Tag = Tag(0x5000, 0x0104);
/// MaximumCoordinateValue (50xx,0105) US 1-n
#[rustfmt::skip]
pub const MAXIMUM_COORDINATE_VALUE: Tag = Tag(0x5000, 0x0105);
/// CurveRange (50xx,0106) SH 1-n
#[rustfmt::skip]
pub const CURVE_RANGE: Tag = Tag(0x5000, 0x0106);
/// CurveDataDescriptor (50xx,0110) US 1-n
#[rustfmt::skip]
pub const CURVE_DATA_DESCRIPTOR: Tag = Tag(0x5000, 0x0110);
/// CoordinateStartValue (50xx,0112) US 1-n
#[rustfmt::skip]
pub const COORDINATE_START_VALUE: Tag = Tag(0x5000, 0x0112);
/// CoordinateStepValue (50xx,0114) US 1-n
#[rustfmt::skip]
pub const COORDINATE_STEP_VALUE: Tag = Tag(0x5000, 0x0114);
/// CurveActivationLayer (50xx,1001) CS 1
#[rustfmt::skip]
pub const CURVE_ACTIVATION_LAYER: Tag = Tag(0x5000, 0x1001);
/// AudioType (50xx,2000) US 1
#[rustfmt::skip]
pub const AUDIO_TYPE: Tag = Tag(0x5000, 0x2000);
/// AudioSampleFormat (50xx,2002) US 1
#[rustfmt::skip]
pub const AUDIO_SAMPLE_FORMAT: Tag = Tag(0x5000, 0x2002);
/// NumberOfChannels (50xx,2004) US 1
#[rustfmt::skip]
pub const NUMBER_OF_CHANNELS: Tag = Tag(0x5000, 0x2004);
/// NumberOfSamples (50xx,2006) UL 1
#[rustfmt::skip]
pub const NUMBER_OF_SAMPLES: Tag = Tag(0x5000, 0x2006);
/// SampleRate (50xx,2008) UL 1
#[rustfmt::skip]
pub const SAMPLE_RATE: Tag = Tag(0x5000, 0x2008);
/// TotalTime (50xx,200A) UL 1
#[rustfmt::skip]
pub const TOTAL_TIME: Tag = Tag(0x5000, 0x200A);
/// AudioSampleData (50xx,200C) OB or OW 1
#[rustfmt::skip]
pub const AUDIO_SAMPLE_DATA: Tag = Tag(0x5000, 0x200C);
/// AudioComments (50xx,200E) LT 1
#[rustfmt::skip]
pub const AUDIO_COMMENTS: Tag = Tag(0x5000, 0x200E);
/// CurveLabel (50xx,2500) LO 1
#[rustfmt::skip]
pub const CURVE_LABEL: Tag = Tag(0x5000, 0x2500);
/// CurveReferencedOverlaySequence (50xx,2600) SQ 1
#[rustfmt::skip]
pub const CURVE_REFERENCED_OVERLAY_SEQUENCE: Tag = Tag(0x5000, 0x2600);
/// CurveReferencedOverlayGroup (50xx,2610) US 1
#[rustfmt::skip]
pub const CURVE_REFERENCED_OVERLAY_GROUP: Tag = Tag(0x5000, 0x2610);
/// CurveData (50xx,3000) OB or OW 1
#[rustfmt::skip]
pub const CURVE_DATA: Tag = Tag(0x5000, 0x3000);
/// OverlayRows (60xx,0010) US 1
#[rustfmt::skip]
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);
/// OverlayColumns (60xx,0011) US 1
#[rustfmt::skip]
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);
/// OverlayPlanes (60xx,0012) US 1
#[rustfmt::skip]
pub const OVERLAY_PLANES: Tag = Tag(0x6000, 0x0012);
/// NumberOfFramesInOverlay (60xx,0015) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES_IN_OVERLAY: Tag = Tag(0x6000, 0x0015);
/// OverlayDescription (60xx,0022) LO 1
#[rustfmt::skip]
pub const OVERLAY_DESCRIPTION: Tag = Tag(0x6000, 0x0022);
/// OverlayType (60xx,0040) CS 1
#[rustfmt::skip]
pub const OVERLAY_TYPE: Tag = Tag(0x6000, 0x0040);
/// OverlaySubtype (60xx,0045) LO 1
#[rustfmt::skip]
pub const OVERLAY_SUBTYPE: Tag = Tag(0x6000, 0x0045);
/// OverlayOrigin (60xx,0050) SS 2
#[rustfmt::skip]
pub const OVERLAY_ORIGIN: Tag = Tag(0x6000, 0x0050);
/// ImageFrameOrigin (60xx,0051) US 1
#[rustfmt::skip]
pub const IMAGE_FRAME_ORIGIN: Tag = Tag(0x6000, 0x0051);
/// OverlayPlaneOrigin (60xx,0052) US 1
#[rustfmt::skip]
pub const OVERLAY_PLANE_ORIGIN: Tag = Tag(0x6000, 0x0052);
/// OverlayBitsAllocated (60xx,0100) US 1
#[rustfmt::skip]
pub const OVERLAY_BITS_ALLOCATED: Tag = Tag(0x6000, 0x0100);
/// OverlayBitPosition (60xx,0102) US 1
#[rustfmt::skip]
pub const OVERLAY_BIT_POSITION: Tag = Tag(0x6000, 0x0102);
/// OverlayFormat (60xx,0110) CS 1
#[rustfmt::skip]
pub const OVERLAY_FORMAT: Tag = Tag(0x6000, 0x0110);
/// OverlayLocation (60xx,0200) US 1
#[rustfmt::skip]
pub const OVERLAY_LOCATION: Tag = Tag(0x6000, 0x0200);
/// OverlayCodeLabel (60xx,0800) CS 1-n
#[rustfmt::skip]
pub const OVERLAY_CODE_LABEL: Tag = Tag(0x6000, 0x0800);
/// OverlayNumberOfTables (60xx,0802) US 1
#[rustfmt::skip]
pub const OVERLAY_NUMBER_OF_TABLES: Tag = Tag(0x6000, 0x0802);
/// OverlayCodeTableLocation (60xx,0803) AT 1-n
#[rustfmt::skip]
pub const OVERLAY_CODE_TABLE_LOCATION: Tag = Tag(0x6000, 0x0803);
/// OverlayBitsForCodeWord (60xx,0804) US 1
#[rustfmt::skip]
pub const OVERLAY_BITS_FOR_CODE_WORD: Tag = Tag(0x6000, 0x0804);
/// OverlayActivationLayer (60xx,1001) CS 1
#[rustfmt::skip]
pub const OVERLAY_ACTIVATION_LAYER: Tag = Tag(0x6000, 0x1001);
/// OverlayDescriptorGray (60xx,1100) US 1
#[rustfmt::skip]
pub const OVERLAY_DESCRIPTOR_GRAY: Tag = Tag(0x6000, 0x1100);
/// OverlayDescriptorRed (60xx,1101) US 1
#[rustfmt::skip]
pub const OVERLAY_DESCRIPTOR_RED: Tag = Tag(0x6000, 0x1101);
/// OverlayDescriptorGreen (60xx,1102) US 1
#[rustfmt::skip]
pub const OVERLAY_DESCRIPTOR_GREEN: Tag = Tag(0x6000, 0x1102);
/// OverlayDescriptorBlue (60xx,1103) US 1
#[rustfmt::skip]
pub const OVERLAY_DESCRIPTOR_BLUE: Tag = Tag(0x6000, 0x1103);
/// OverlaysGray (60xx,1200) US 1-n
#[rustfmt::skip]
pub const OVERLAYS_GRAY: Tag = Tag(0x6000, 0x1200);
/// OverlaysRed (60xx,1201) US 1-n
#[rustfmt::skip]
pub const OVERLAYS_RED: Tag = Tag(0x6000, 0x1201);
/// OverlaysGreen (60xx,1202) US 1-n
#[rustfmt::skip]
pub const OVERLAYS_GREEN: Tag = Tag(0x6000, 0x1202);
/// OverlaysBlue (60xx,1203) US 1-n
#[rustfmt::skip]
pub const OVERLAYS_BLUE: Tag = Tag(0x6000, 0x1203);
/// ROIArea (60xx,1301) IS 1
#[rustfmt::skip]
pub const ROI_AREA: Tag = Tag(0x6000, 0x1301);
/// ROIMean (60xx,1302) DS 1
#[rustfmt::skip]
pub const ROI_MEAN: Tag = Tag(0x6000, 0x1302);
/// ROIStandardDeviation (60xx,1303) DS 1
#[rustfmt::skip]
pub const ROI_STANDARD_DEVIATION: Tag = Tag(0x6000, 0x1303);
/// OverlayLabel (60xx,1500) LO 1
#[rustfmt::skip]
pub const OVERLAY_LABEL: Tag = Tag(0x6000, 0x1500);
/// OverlayData (60xx,3000) OB or OW 1
#[rustfmt::skip]
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);
/// OverlayComments (60xx,4000) LT 1
#[rustfmt::skip]
pub const OVERLAY_COMMENTS: Tag = Tag(0x6000, 0x4000);
/// VariablePixelData (7Fxx,0010) OB or OW 1
#[rustfmt::skip]
pub const VARIABLE_PIXEL_DATA: Tag = Tag(0x7F00, 0x0010);
/// VariableNextDataGroup (7Fxx,0011) US 1
#[rustfmt::skip]
pub const VARIABLE_NEXT_DATA_GROUP: Tag = Tag(0x7F00, 0x0011);
/// VariableCoefficientsSDVN (7Fxx,0020) OW 1
#[rustfmt::skip]
pub const VARIABLE_COEFFICIENTS_SDVN: Tag = Tag(0x7F00, 0x0020);
/// VariableCoefficientsSDHN (7Fxx,0030) OW 1
#[rustfmt::skip]
pub const VARIABLE_COEFFICIENTS_SDHN: Tag = Tag(0x7F00, 0x0030);
/// VariableCoefficientsSDDN (7Fxx,0040) OW 1
#[rustfmt::skip]
pub const VARIABLE_COEFFICIENTS_SDDN: Tag = Tag(0x7F00, 0x0040);
/// ExtendedOffsetTable (7FE0,0001) OV 1
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE: Tag = Tag(0x7FE0, 0x0001);
/// ExtendedOffsetTableLengths (7FE0,0002) OV 1
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE_LENGTHS: Tag = Tag(0x7FE0, 0x0002);
/// EncapsulatedPixelDataValueTotalLength (7FE0,0003) UV 1
#[rustfmt::skip]
pub const ENCAPSULATED_PIXEL_DATA_VALUE_TOTAL_LENGTH: Tag = Tag(0x7FE0, 0x0003);
/// FloatPixelData (7FE0,0008) OF 1
#[rustfmt::skip]
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// DoubleFloatPixelData (7FE0,0009) OD 1
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// PixelData (7FE0,0010) OB or OW 1
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// CoefficientsSDVN (7FE0,0020) OW 1
#[rustfmt::skip]
pub const COEFFICIENTS_SDVN: Tag = Tag(0x7FE0, 0x0020);
/// CoefficientsSDHN (7FE0,0030) OW 1
#[rustfmt::skip]
pub const COEFFICIENTS_SDHN: Tag = Tag(0x7FE0, 0x0030);
/// CoefficientsSDDN (7FE0,0040) OW 1
#[rustfmt::skip]
pub const COEFFICIENTS_SDDN: Tag = Tag(0x7FE0, 0x0040);
/// DigitalSignaturesSequence (FFFA,FFFA) SQ 1
#[rustfmt::skip]
pub const DIGITAL_SIGNATURES_SEQUENCE: Tag = Tag(0xFFFA, 0xFFFA);
/// DataSetTrailingPadding (FFFC,FFFC) OB 1
#[rustfmt::skip]
pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);

type E = DataDictionaryEntryRef<'static>;

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E { tag: Single(COMMAND_GROUP_LENGTH), alias: "CommandGroupLength", vr: Exact(UL), vm: "1" },
    E { tag: Single(COMMAND_LENGTH_TO_END), alias: "CommandLengthToEnd", vr: Exact(UL), vm: "1" },
    E { tag: Single(AFFECTED_SOP_CLASS_UID), alias: "AffectedSOPClassUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(REQUESTED_SOP_CLASS_UID), alias: "RequestedSOPClassUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(COMMAND_RECOGNITION_CODE), alias: "CommandRecognitionCode", vr: Exact(SH), vm: "1" },
    E { tag: Single(COMMAND_FIELD), alias: "CommandField", vr: Exact(US), vm: "1" },
    E { tag: Single(MESSAGE_ID), alias: "MessageID", vr: Exact(US), vm: "1" },
    E { tag: Single(MESSAGE_ID_BEING_RESPONDED_TO), alias: "MessageIDBeingRespondedTo", vr: Exact(US), vm: "1" },
    E { tag: Single(INITIATOR), alias: "Initiator", vr: Exact(AE), vm: "1" },
    E { tag: Single(RECEIVER), alias: "Receiver", vr: Exact(AE), vm: "1" },
    E { tag: Single(FIND_LOCATION), alias: "FindLocation", vr: Exact(AE), vm: "1" },
    E { tag: Single(MOVE_DESTINATION), alias: "MoveDestination", vr: Exact(AE), vm: "1" },
    E { tag: Single(PRIORITY), alias: "Priority", vr: Exact(US), vm: "1" },
    E { tag: Single(COMMAND_DATA_SET_TYPE), alias: "CommandDataSetType", vr: Exact(US), vm: "1" },
    E { tag: Single(NUMBER_OF_MATCHES), alias: "NumberOfMatches", vr: Exact(US), vm: "1" },
    E { tag: Single(RESPONSE_SEQUENCE_NUMBER), alias: "ResponseSequenceNumber", vr: Exact(US), vm: "1" },
    E { tag: Single(STATUS), alias: "Status", vr: Exact(US), vm: "1" },
    E { tag: Single(OFFENDING_ELEMENT), alias: "OffendingElement", vr: Exact(AT), vm: "1-n" },
    E { tag: Single(ERROR_COMMENT), alias: "ErrorComment", vr: Exact(LO), vm: "1" },
    E { tag: Single(ERROR_ID), alias: "ErrorID", vr: Exact(US), vm: "1" },
    E { tag: Single(AFFECTED_SOP_INSTANCE_UID), alias: "AffectedSOPInstanceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(REQUESTED_SOP_INSTANCE_UID), alias: "RequestedSOPInstanceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(EVENT_TYPE_ID), alias: "EventTypeID", vr: Exact(US), vm: "1" },
    E { tag: Single(ATTRIBUTE_IDENTIFIER_LIST), alias: "AttributeIdentifierList", vr: Exact(AT), vm: "1-n" },
    E { tag: Single(ACTION_TYPE_ID), alias: "ActionTypeID", vr: Exact(US), vm: "1" },
    E { tag: Single(NUMBER_OF_REMAINING_SUBOPERATIONS), alias: "NumberOfRemainingSuboperations", vr: Exact(US), vm: "1" },
    E { tag: Single(NUMBER_OF_COMPLETED_SUBOPERATIONS), alias: "NumberOfCompletedSuboperations", vr: Exact(US), vm: "1" },
    E { tag: Single(NUMBER_OF_FAILED_SUBOPERATIONS), alias: "NumberOfFailedSuboperations", vr: Exact(US), vm: "1" },
    E { tag: Single(NUMBER_OF_WARNING_SUBOPERATIONS), alias: "NumberOfWarningSuboperations", vr: Exact(US), vm: "1" },
    E { tag: Single(MOVE_ORIGINATOR_APPLICATION_ENTITY_TITLE), alias: "MoveOriginatorApplicationEntityTitle", vr: Exact(AE), vm: "1" },
    E { tag: Single(MOVE_ORIGINATOR_MESSAGE_ID), alias: "MoveOriginatorMessageID", vr: Exact(US), vm: "1" },
    E { tag: Single(FILE_META_INFORMATION_GROUP_LENGTH), alias: "FileMetaInformationGroupLength", vr: Exact(UL), vm: "1" },
    E { tag: Single(FILE_META_INFORMATION_VERSION), alias: "FileMetaInformationVersion", vr: Exact(OB), vm: "1" },
    E { tag: Single(MEDIA_STORAGE_SOP_CLASS_UID), alias: "MediaStorageSOPClassUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(MEDIA_STORAGE_SOP_INSTANCE_UID), alias: "MediaStorageSOPInstanceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(TRANSFER_SYNTAX_UID), alias: "TransferSyntaxUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(IMPLEMENTATION_CLASS_UID), alias: "ImplementationClassUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(IMPLEMENTATION_VERSION_NAME), alias: "ImplementationVersionName", vr: Exact(SH), vm: "1" },
    E { tag: Single(SOURCE_APPLICATION_ENTITY_TITLE), alias: "SourceApplicationEntityTitle", vr: Exact(AE), vm: "1" },
    E { tag: Single(SENDING_APPLICATION_ENTITY_TITLE), alias: "SendingApplicationEntityTitle", vr: Exact(AE), vm: "1" },
    E { tag: Single(RECEIVING_APPLICATION_ENTITY_TITLE), alias: "ReceivingApplicationEntityTitle", vr: Exact(AE), vm: "1" },
    E { tag: Single(SOURCE_PRESENTATION_ADDRESS), alias: "SourcePresentationAddress", vr: Exact(UR), vm: "1" },
    E { tag: Single(SENDING_PRESENTATION_ADDRESS), alias: "SendingPresentationAddress", vr: Exact(UR), vm: "1" },
    E { tag: Single(RECEIVING_PRESENTATION_ADDRESS), alias: "ReceivingPresentationAddress", vr: Exact(UR), vm: "1" },
    E { tag: Single(RTV_META_INFORMATION_VERSION), alias: "RTVMetaInformationVersion", vr: Exact(OB), vm: "1" },
    E { tag: Single(RTV_COMMUNICATION_SOP_CLASS_UID), alias: "RTVCommunicationSOPClassUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(RTV_COMMUNICATION_SOP_INSTANCE_UID), alias: "RTVCommunicationSOPInstanceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(RTV_SOURCE_IDENTIFIER), alias: "RTVSourceIdentifier", vr: Exact(OB), vm: "1" },
    E { tag: Single(RTV_FLOW_IDENTIFIER), alias: "RTVFlowIdentifier", vr: Exact(OB), vm: "1" },
    E { tag: Single(RTV_FLOW_RTP_SAMPLING_RATE), alias: "RTVFlowRTPSamplingRate", vr: Exact(UL), vm: "1" },
    E { tag: Single(RTV_FLOW_ACTUAL_FRAME_DURATION), alias: "RTVFlowActualFrameDuration", vr: Exact(FD), vm: "1" },
    E { tag: Single(PRIVATE_INFORMATION_CREATOR_UID), alias: "PrivateInformationCreatorUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(PRIVATE_INFORMATION), alias: "PrivateInformation", vr: Exact(OB), vm: "1" },
    E { tag: Single(FILE_SET_ID), alias: "FileSetID", vr: Exact(CS), vm: "1" },
    E { tag: Single(FILE_SET_DESCRIPTOR_FILE_ID), alias: "FileSetDescriptorFileID", vr: Exact(CS), vm: "1-8" },
    E { tag: Single(SPECIFIC_CHARACTER_SET_OF_FILE_SET_DESCRIPTOR_FILE), alias: "SpecificCharacterSetOfFileSetDescriptorFile", vr: Exact(CS), vm: "1" },
    E { tag: Single(OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY), alias: "OffsetOfTheFirstDirectoryRecordOfTheRootDirectoryEntity", vr: Exact(UL), vm: "1" },
    E { tag: Single(OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY), alias: "OffsetOfTheLastDirectoryRecordOfTheRootDirectoryEntity", vr: Exact(UL), vm: "1" },
    E { tag: Single(FILE_SET_CONSISTENCY_FLAG), alias: "FileSetConsistencyFlag", vr: Exact(US), vm: "1" },
    E { tag: Single(DIRECTORY_RECORD_SEQUENCE), alias: "DirectoryRecordSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(OFFSET_OF_THE_NEXT_DIRECTORY_RECORD), alias: "OffsetOfTheNextDirectoryRecord", vr: Exact(UL), vm: "1" },
    E { tag: Single(RECORD_IN_USE_FLAG), alias: "RecordInUseFlag", vr: Exact(US), vm: "1" },
    E { tag: Single(OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY), alias: "OffsetOfReferencedLowerLevelDirectoryEntity", vr: Exact(UL), vm: "1" },
    E { tag: Single(DIRECTORY_RECORD_TYPE), alias: "DirectoryRecordType", vr: Exact(CS), vm: "1" },
    E { tag: Single(PRIVATE_RECORD_UID), alias: "PrivateRecordUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(REFERENCED_FILE_ID), alias: "ReferencedFileID", vr: Exact(CS), vm: "1-8" },
    E { tag: Single(MRDR_DIRECTORY_RECORD_OFFSET), alias: "MRDRDirectoryRecordOffset", vr: Exact(UL), vm: "1" },
    E { tag: Single(REFERENCED_SOP_CLASS_UID_IN_FILE), alias: "ReferencedSOPClassUIDInFile", vr: Exact(UI), vm: "1" },
    E { tag: Single(REFERENCED_SOP_INSTANCE_UID_IN_FILE), alias: "ReferencedSOPInstanceUIDInFile", vr: Exact(UI), vm: "1" },
    E { tag: Single(REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE), alias: "ReferencedTransferSyntaxUIDInFile", vr: Exact(UI), vm: "1" },
    E { tag: Single(REFERENCED_RELATED_GENERAL_SOP_CLASS_UID_IN_FILE), alias: "ReferencedRelatedGeneralSOPClassUIDInFile", vr: Exact(UI), vm: "1-n" },
    E { tag: Single(NUMBER_OF_REFERENCES), alias: "NumberOfReferences", vr: Exact(UL), vm: "1" },
    E { tag: Single(LENGTH_TO_END), alias: "LengthToEnd", vr: Exact(UL), vm: "1" },
    E { tag: Single(SPECIFIC_CHARACTER_SET), alias: "SpecificCharacterSet", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(LANGUAGE_CODE_SEQUENCE), alias: "LanguageCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(IMAGE_TYPE), alias: "ImageType", vr: Exact(CS), vm: "2-n" },
    E { tag: Single(RECOGNITION_CODE), alias: "RecognitionCode", vr: Exact(SH), vm: "1" },
    E { tag: Single(INSTANCE_CREATION_DATE), alias: "InstanceCreationDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(INSTANCE_CREATION_TIME), alias: "InstanceCreationTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(INSTANCE_CREATOR_UID), alias: "InstanceCreatorUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(INSTANCE_COERCION_DATE_TIME), alias: "InstanceCoercionDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(SOP_CLASS_UID), alias: "SOPClassUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(ACQUISITION_UID), alias: "AcquisitionUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(SOP_INSTANCE_UID), alias: "SOPInstanceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(PYRAMID_UID), alias: "PyramidUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(RELATED_GENERAL_SOP_CLASS_UID), alias: "RelatedGeneralSOPClassUID", vr: Exact(UI), vm: "1-n" },
    E { tag: Single(ORIGINAL_SPECIALIZED_SOP_CLASS_UID), alias: "OriginalSpecializedSOPClassUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(STUDY_DATE), alias: "StudyDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(SERIES_DATE), alias: "SeriesDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(ACQUISITION_DATE), alias: "AcquisitionDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(CONTENT_DATE), alias: "ContentDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(OVERLAY_DATE), alias: "OverlayDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(CURVE_DATE), alias: "CurveDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(ACQUISITION_DATE_TIME), alias: "AcquisitionDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(STUDY_TIME), alias: "StudyTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(SERIES_TIME), alias: "SeriesTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(ACQUISITION_TIME), alias: "AcquisitionTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(CONTENT_TIME), alias: "ContentTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(OVERLAY_TIME), alias: "OverlayTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(CURVE_TIME), alias: "CurveTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(DATA_SET_TYPE), alias: "DataSetType", vr: Exact(US), vm: "1" },
    E { tag: Single(DATA_SET_SUBTYPE), alias: "DataSetSubtype", vr: Exact(LO), vm: "1" },
    E { tag: Single(NUCLEAR_MEDICINE_SERIES_TYPE), alias: "NuclearMedicineSeriesType", vr: Exact(CS), vm: "1" },
    E { tag: Single(ACCESSION_NUMBER), alias: "AccessionNumber", vr: Exact(SH), vm: "1" },
    E { tag: Single(ISSUER_OF_ACCESSION_NUMBER_SEQUENCE), alias: "IssuerOfAccessionNumberSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(QUERY_RETRIEVE_LEVEL), alias: "QueryRetrieveLevel", vr: Exact(CS), vm: "1" },
    E { tag: Single(QUERY_RETRIEVE_VIEW), alias: "QueryRetrieveView", vr: Exact(CS), vm: "1" },
    E { tag: Single(RETRIEVE_AE_TITLE), alias: "RetrieveAETitle", vr: Exact(AE), vm: "1-n" },
    E { tag: Single(STATION_AE_TITLE), alias: "StationAETitle", vr: Exact(AE), vm: "1" },
    E { tag: Single(INSTANCE_AVAILABILITY), alias: "InstanceAvailability", vr: Exact(CS), vm: "1" },
    E { tag: Single(FAILED_SOP_INSTANCE_UID_LIST), alias: "FailedSOPInstanceUIDList", vr: Exact(UI), vm: "1-n" },
    E { tag: Single(MODALITY), alias: "Modality", vr: Exact(CS), vm: "1" },
    E { tag: Single(MODALITIES_IN_STUDY), alias: "ModalitiesInStudy", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(SOP_CLASSES_IN_STUDY), alias: "SOPClassesInStudy", vr: Exact(UI), vm: "1-n" },
    E { tag: Single(ANATOMIC_REGIONS_IN_STUDY_CODE_SEQUENCE), alias: "AnatomicRegionsInStudyCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONVERSION_TYPE), alias: "ConversionType", vr: Exact(CS), vm: "1" },
    E { tag: Single(PRESENTATION_INTENT_TYPE), alias: "PresentationIntentType", vr: Exact(CS), vm: "1" },
    E { tag: Single(MANUFACTURER), alias: "Manufacturer", vr: Exact(LO), vm: "1" },
    E { tag: Single(INSTITUTION_NAME), alias: "InstitutionName", vr: Exact(LO), vm: "1" },
    E { tag: Single(INSTITUTION_ADDRESS), alias: "InstitutionAddress", vr: Exact(ST), vm: "1" },
    E { tag: Single(INSTITUTION_CODE_SEQUENCE), alias: "InstitutionCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERRING_PHYSICIAN_NAME), alias: "ReferringPhysicianName", vr: Exact(PN), vm: "1" },
    E { tag: Single(REFERRING_PHYSICIAN_ADDRESS), alias: "ReferringPhysicianAddress", vr: Exact(ST), vm: "1" },
    E { tag: Single(REFERRING_PHYSICIAN_TELEPHONE_NUMBERS), alias: "ReferringPhysicianTelephoneNumbers", vr: Exact(SH), vm: "1-n" },
    E { tag: Single(REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE), alias: "ReferringPhysicianIdentificationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONSULTING_PHYSICIAN_NAME), alias: "ConsultingPhysicianName", vr: Exact(PN), vm: "1-n" },
    E { tag: Single(CONSULTING_PHYSICIAN_IDENTIFICATION_SEQUENCE), alias: "ConsultingPhysicianIdentificationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CODE_VALUE), alias: "CodeValue", vr: Exact(SH), vm: "1" },
    E { tag: Single(EXTENDED_CODE_VALUE), alias: "ExtendedCodeValue", vr: Exact(LO), vm: "1" },
    E { tag: Single(CODING_SCHEME_DESIGNATOR), alias: "CodingSchemeDesignator", vr: Exact(SH), vm: "1" },
    E { tag: Single(CODING_SCHEME_VERSION), alias: "CodingSchemeVersion", vr: Exact(SH), vm: "1" },
    E { tag: Single(CODE_MEANING), alias: "CodeMeaning", vr: Exact(LO), vm: "1" },
    E { tag: Single(MAPPING_RESOURCE), alias: "MappingResource", vr: Exact(CS), vm: "1" },
    E { tag: Single(CONTEXT_GROUP_VERSION), alias: "ContextGroupVersion", vr: Exact(DT), vm: "1" },
    E { tag: Single(CONTEXT_GROUP_LOCAL_VERSION), alias: "ContextGroupLocalVersion", vr: Exact(DT), vm: "1" },
    E { tag: Single(EXTENDED_CODE_MEANING), alias: "ExtendedCodeMeaning", vr: Exact(LT), vm: "1" },
    E { tag: Single(CONTEXT_GROUP_EXTENSION_FLAG), alias: "ContextGroupExtensionFlag", vr: Exact(CS), vm: "1" },
    E { tag: Single(CODING_SCHEME_UID), alias: "CodingSchemeUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(CONTEXT_GROUP_EXTENSION_CREATOR_UID), alias: "ContextGroupExtensionCreatorUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(CONTEXT_IDENTIFIER), alias: "ContextIdentifier", vr: Exact(CS), vm: "1" },
    E { tag: Single(CODING_SCHEME_IDENTIFICATION_SEQUENCE), alias: "CodingSchemeIdentificationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CODING_SCHEME_REGISTRY), alias: "CodingSchemeRegistry", vr: Exact(LO), vm: "1" },
    E { tag: Single(CODING_SCHEME_EXTERNAL_ID), alias: "CodingSchemeExternalID", vr: Exact(ST), vm: "1" },
    E { tag: Single(CODING_SCHEME_NAME), alias: "CodingSchemeName", vr: Exact(ST), vm: "1" },
    E { tag: Single(CODING_SCHEME_RESPONSIBLE_ORGANIZATION), alias: "CodingSchemeResponsibleOrganization", vr: Exact(ST), vm: "1" },
    E { tag: Single(CONTEXT_UID), alias: "ContextUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(MAPPING_RESOURCE_UID), alias: "MappingResourceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(LONG_CODE_VALUE), alias: "LongCodeValue", vr: Exact(UC), vm: "1" },
    E { tag: Single(URN_CODE_VALUE), alias: "URNCodeValue", vr: Exact(UR), vm: "1" },
    E { tag: Single(EQUIVALENT_CODE_SEQUENCE), alias: "EquivalentCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MAPPING_RESOURCE_NAME), alias: "MappingResourceName", vr: Exact(LO), vm: "1" },
    E { tag: Single(CONTEXT_GROUP_IDENTIFICATION_SEQUENCE), alias: "ContextGroupIdentificationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MAPPING_RESOURCE_IDENTIFICATION_SEQUENCE), alias: "MappingResourceIdentificationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TIMEZONE_OFFSET_FROM_UTC), alias: "TimezoneOffsetFromUTC", vr: Exact(SH), vm: "1" },
    E { tag: Single(RESPONSIBLE_GROUP_CODE_SEQUENCE), alias: "ResponsibleGroupCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(EQUIPMENT_MODALITY), alias: "EquipmentModality", vr: Exact(CS), vm: "1" },
    E { tag: Single(MANUFACTURER_RELATED_MODEL_GROUP), alias: "ManufacturerRelatedModelGroup", vr: Exact(LO), vm: "1" },
    E { tag: Single(PRIVATE_DATA_ELEMENT_CHARACTERISTICS_SEQUENCE), alias: "PrivateDataElementCharacteristicsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PRIVATE_GROUP_REFERENCE), alias: "PrivateGroupReference", vr: Exact(US), vm: "1" },
    E { tag: Single(PRIVATE_CREATOR_REFERENCE), alias: "PrivateCreatorReference", vr: Exact(LO), vm: "1" },
    E { tag: Single(BLOCK_IDENTIFYING_INFORMATION_STATUS), alias: "BlockIdentifyingInformationStatus", vr: Exact(CS), vm: "1" },
    E { tag: Single(NONIDENTIFYING_PRIVATE_ELEMENTS), alias: "NonidentifyingPrivateElements", vr: Exact(US), vm: "1-n" },
    E { tag: Single(DEIDENTIFICATION_ACTION_SEQUENCE), alias: "DeidentificationActionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(IDENTIFYING_PRIVATE_ELEMENTS), alias: "IdentifyingPrivateElements", vr: Exact(US), vm: "1-n" },
    E { tag: Single(DEIDENTIFICATION_ACTION), alias: "DeidentificationAction", vr: Exact(CS), vm: "1" },
    E { tag: Single(PRIVATE_DATA_ELEMENT), alias: "PrivateDataElement", vr: Exact(US), vm: "1" },
    E { tag: Single(PRIVATE_DATA_ELEMENT_VALUE_MULTIPLICITY), alias: "PrivateDataElementValueMultiplicity", vr: Exact(UL), vm: "1-3" },
    E { tag: Single(PRIVATE_DATA_ELEMENT_VALUE_REPRESENTATION), alias: "PrivateDataElementValueRepresentation", vr: Exact(CS), vm: "1" },
    E { tag: Single(PRIVATE_DATA_ELEMENT_NUMBER_OF_ITEMS), alias: "PrivateDataElementNumberOfItems", vr: Exact(UL), vm: "1-2" },
    E { tag: Single(PRIVATE_DATA_ELEMENT_NAME), alias: "PrivateDataElementName", vr: Exact(UC), vm: "1" },
    E { tag: Single(PRIVATE_DATA_ELEMENT_KEYWORD), alias: "PrivateDataElementKeyword", vr: Exact(UC), vm: "1" },
    E { tag: Single(PRIVATE_DATA_ELEMENT_DESCRIPTION), alias: "PrivateDataElementDescription", vr: Exact(UT), vm: "1" },
    E { tag: Single(PRIVATE_DATA_ELEMENT_ENCODING), alias: "PrivateDataElementEncoding", vr: Exact(UT), vm: "1" },
    E { tag: Single(PRIVATE_DATA_ELEMENT_DEFINITION_SEQUENCE), alias: "PrivateDataElementDefinitionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(NETWORK_ID), alias: "NetworkID", vr: Exact(AE), vm: "1" },
    E { tag: Single(STATION_NAME), alias: "StationName", vr: Exact(SH), vm: "1" },
    E { tag: Single(STUDY_DESCRIPTION), alias: "StudyDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(PROCEDURE_CODE_SEQUENCE), alias: "ProcedureCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SERIES_DESCRIPTION), alias: "SeriesDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(SERIES_DESCRIPTION_CODE_SEQUENCE), alias: "SeriesDescriptionCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(INSTITUTIONAL_DEPARTMENT_NAME), alias: "InstitutionalDepartmentName", vr: Exact(LO), vm: "1" },
    E { tag: Single(INSTITUTIONAL_DEPARTMENT_TYPE_CODE_SEQUENCE), alias: "InstitutionalDepartmentTypeCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PHYSICIANS_OF_RECORD), alias: "PhysiciansOfRecord", vr: Exact(PN), vm: "1-n" },
    E { tag: Single(PHYSICIANS_OF_RECORD_IDENTIFICATION_SEQUENCE), alias: "PhysiciansOfRecordIdentificationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PERFORMING_PHYSICIAN_NAME), alias: "PerformingPhysicianName", vr: Exact(PN), vm: "1-n" },
    E { tag: Single(PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE), alias: "PerformingPhysicianIdentificationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(NAME_OF_PHYSICIANS_READING_STUDY), alias: "NameOfPhysiciansReadingStudy", vr: Exact(PN), vm: "1-n" },
    E { tag: Single(PHYSICIANS_READING_STUDY_IDENTIFICATION_SEQUENCE), alias: "PhysiciansReadingStudyIdentificationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(OPERATORS_NAME), alias: "OperatorsName", vr: Exact(PN), vm: "1-n" },
    E { tag: Single(OPERATOR_IDENTIFICATION_SEQUENCE), alias: "OperatorIdentificationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ADMITTING_DIAGNOSES_DESCRIPTION), alias: "AdmittingDiagnosesDescription", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(ADMITTING_DIAGNOSES_CODE_SEQUENCE), alias: "AdmittingDiagnosesCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PYRAMID_DESCRIPTION), alias: "PyramidDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(MANUFACTURER_MODEL_NAME), alias: "ManufacturerModelName", vr: Exact(LO), vm: "1" },
    E { tag: Single(REFERENCED_RESULTS_SEQUENCE), alias: "ReferencedResultsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_STUDY_SEQUENCE), alias: "ReferencedStudySequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE), alias: "ReferencedPerformedProcedureStepSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_SERIES_SEQUENCE), alias: "ReferencedSeriesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_PATIENT_SEQUENCE), alias: "ReferencedPatientSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_VISIT_SEQUENCE), alias: "ReferencedVisitSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_OVERLAY_SEQUENCE), alias: "ReferencedOverlaySequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_STEREOMETRIC_INSTANCE_SEQUENCE), alias: "ReferencedStereometricInstanceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_WAVEFORM_SEQUENCE), alias: "ReferencedWaveformSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_IMAGE_SEQUENCE), alias: "ReferencedImageSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_CURVE_SEQUENCE), alias: "ReferencedCurveSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_INSTANCE_SEQUENCE), alias: "ReferencedInstanceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_REAL_WORLD_VALUE_MAPPING_INSTANCE_SEQUENCE), alias: "ReferencedRealWorldValueMappingInstanceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_SOP_CLASS_UID), alias: "ReferencedSOPClassUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(REFERENCED_SOP_INSTANCE_UID), alias: "ReferencedSOPInstanceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(DEFINITION_SOURCE_SEQUENCE), alias: "DefinitionSourceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SOP_CLASSES_SUPPORTED), alias: "SOPClassesSupported", vr: Exact(UI), vm: "1-n" },
    E { tag: Single(REFERENCED_FRAME_NUMBER), alias: "ReferencedFrameNumber", vr: Exact(IS), vm: "1-n" },
    E { tag: Single(SIMPLE_FRAME_LIST), alias: "SimpleFrameList", vr: Exact(UL), vm: "1-n" },
    E { tag: Single(CALCULATED_FRAME_LIST), alias: "CalculatedFrameList", vr: Exact(UL), vm: "3-3n" },
    E { tag: Single(TIME_RANGE), alias: "TimeRange", vr: Exact(FD), vm: "2" },
    E { tag: Single(FRAME_EXTRACTION_SEQUENCE), alias: "FrameExtractionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MULTI_FRAME_SOURCE_SOP_INSTANCE_UID), alias: "MultiFrameSourceSOPInstanceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(RETRIEVE_URL), alias: "RetrieveURL", vr: Exact(UR), vm: "1" },
    E { tag: Single(TRANSACTION_UID), alias: "TransactionUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(WARNING_REASON), alias: "WarningReason", vr: Exact(US), vm: "1" },
    E { tag: Single(FAILURE_REASON), alias: "FailureReason", vr: Exact(US), vm: "1" },
    E { tag: Single(FAILED_SOP_SEQUENCE), alias: "FailedSOPSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_SOP_SEQUENCE), alias: "ReferencedSOPSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(OTHER_FAILURES_SEQUENCE), alias: "OtherFailuresSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(STUDIES_CONTAINING_OTHER_REFERENCED_INSTANCES_SEQUENCE), alias: "StudiesContainingOtherReferencedInstancesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RELATED_SERIES_SEQUENCE), alias: "RelatedSeriesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION_RETIRED), alias: "LossyImageCompressionRetired", vr: Exact(CS), vm: "1" },
    E { tag: Single(DERIVATION_DESCRIPTION), alias: "DerivationDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(SOURCE_IMAGE_SEQUENCE), alias: "SourceImageSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(STAGE_NAME), alias: "StageName", vr: Exact(SH), vm: "1" },
    E { tag: Single(STAGE_NUMBER), alias: "StageNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(NUMBER_OF_STAGES), alias: "NumberOfStages", vr: Exact(IS), vm: "1" },
    E { tag: Single(VIEW_NAME), alias: "ViewName", vr: Exact(SH), vm: "1" },
    E { tag: Single(VIEW_NUMBER), alias: "ViewNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(NUMBER_OF_EVENT_TIMERS), alias: "NumberOfEventTimers", vr: Exact(IS), vm: "1" },
    E { tag: Single(NUMBER_OF_VIEWS_IN_STAGE), alias: "NumberOfViewsInStage", vr: Exact(IS), vm: "1" },
    E { tag: Single(EVENT_ELAPSED_TIMES), alias: "EventElapsedTimes", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(EVENT_TIMER_NAMES), alias: "EventTimerNames", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(EVENT_TIMER_SEQUENCE), alias: "EventTimerSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(EVENT_TIME_OFFSET), alias: "EventTimeOffset", vr: Exact(FD), vm: "1" },
    E { tag: Single(EVENT_CODE_SEQUENCE), alias: "EventCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(START_TRIM), alias: "StartTrim", vr: Exact(IS), vm: "1" },
    E { tag: Single(STOP_TRIM), alias: "StopTrim", vr: Exact(IS), vm: "1" },
    E { tag: Single(RECOMMENDED_DISPLAY_FRAME_RATE), alias: "RecommendedDisplayFrameRate", vr: Exact(IS), vm: "1" },
    E { tag: Single(TRANSDUCER_POSITION), alias: "TransducerPosition", vr: Exact(CS), vm: "1" },
    E { tag: Single(TRANSDUCER_ORIENTATION), alias: "TransducerOrientation", vr: Exact(CS), vm: "1" },
    E { tag: Single(ANATOMIC_STRUCTURE), alias: "AnatomicStructure", vr: Exact(CS), vm: "1" },
    E { tag: Single(ANATOMIC_REGION_SEQUENCE), alias: "AnatomicRegionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ANATOMIC_REGION_MODIFIER_SEQUENCE), alias: "AnatomicRegionModifierSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PRIMARY_ANATOMIC_STRUCTURE_SEQUENCE), alias: "PrimaryAnatomicStructureSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ANATOMIC_STRUCTURE_SPACE_OR_REGION_SEQUENCE), alias: "AnatomicStructureSpaceOrRegionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PRIMARY_ANATOMIC_STRUCTURE_MODIFIER_SEQUENCE), alias: "PrimaryAnatomicStructureModifierSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ALTERNATE_REPRESENTATION_SEQUENCE), alias: "AlternateRepresentationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(AVAILABLE_TRANSFER_SYNTAX_UID), alias: "AvailableTransferSyntaxUID", vr: Exact(UI), vm: "1-n" },
    E { tag: Single(IRRADIATION_EVENT_UID), alias: "IrradiationEventUID", vr: Exact(UI), vm: "1-n" },
    E { tag: Single(SOURCE_IRRADIATION_EVENT_SEQUENCE), alias: "SourceIrradiationEventSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RADIOPHARMACEUTICAL_ADMINISTRATION_EVENT_UID), alias: "RadiopharmaceuticalAdministrationEventUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(FRAME_TYPE), alias: "FrameType", vr: Exact(CS), vm: "4" },
    E { tag: Single(REFERENCED_IMAGE_EVIDENCE_SEQUENCE), alias: "ReferencedImageEvidenceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_RAW_DATA_SEQUENCE), alias: "ReferencedRawDataSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CREATOR_VERSION_UID), alias: "CreatorVersionUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(DERIVATION_IMAGE_SEQUENCE), alias: "DerivationImageSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SOURCE_IMAGE_EVIDENCE_SEQUENCE), alias: "SourceImageEvidenceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PIXEL_PRESENTATION), alias: "PixelPresentation", vr: Exact(CS), vm: "1" },
    E { tag: Single(VOLUMETRIC_PROPERTIES), alias: "VolumetricProperties", vr: Exact(CS), vm: "1" },
    E { tag: Single(VOLUME_BASED_CALCULATION_TECHNIQUE), alias: "VolumeBasedCalculationTechnique", vr: Exact(CS), vm: "1" },
    E { tag: Single(COMPLEX_IMAGE_COMPONENT), alias: "ComplexImageComponent", vr: Exact(CS), vm: "1" },
    E { tag: Single(ACQUISITION_CONTRAST), alias: "AcquisitionContrast", vr: Exact(CS), vm: "1" },
    E { tag: Single(DERIVATION_CODE_SEQUENCE), alias: "DerivationCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_PRESENTATION_STATE_SEQUENCE), alias: "ReferencedPresentationStateSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_OTHER_PLANE_SEQUENCE), alias: "ReferencedOtherPlaneSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(FRAME_DISPLAY_SEQUENCE), alias: "FrameDisplaySequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RECOMMENDED_DISPLAY_FRAME_RATE_IN_FLOAT), alias: "RecommendedDisplayFrameRateInFloat", vr: Exact(FL), vm: "1" },
    E { tag: Single(SKIP_FRAME_RANGE_FLAG), alias: "SkipFrameRangeFlag", vr: Exact(CS), vm: "1" },
    E { tag: Single(PATIENT_NAME), alias: "PatientName", vr: Exact(PN), vm: "1" },
    E { tag: Single(PATIENT_ID), alias: "PatientID", vr: Exact(LO), vm: "1" },
    E { tag: Single(ISSUER_OF_PATIENT_ID), alias: "IssuerOfPatientID", vr: Exact(LO), vm: "1" },
    E { tag: Single(TYPE_OF_PATIENT_ID), alias: "TypeOfPatientID", vr: Exact(CS), vm: "1" },
    E { tag: Single(ISSUER_OF_PATIENT_ID_QUALIFIERS_SEQUENCE), alias: "IssuerOfPatientIDQualifiersSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SOURCE_PATIENT_GROUP_IDENTIFICATION_SEQUENCE), alias: "SourcePatientGroupIdentificationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(GROUP_OF_PATIENTS_IDENTIFICATION_SEQUENCE), alias: "GroupOfPatientsIdentificationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SUBJECT_RELATIVE_POSITION_IN_IMAGE), alias: "SubjectRelativePositionInImage", vr: Exact(US), vm: "3" },
    E { tag: Single(PATIENT_BIRTH_DATE), alias: "PatientBirthDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(PATIENT_BIRTH_TIME), alias: "PatientBirthTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(PATIENT_BIRTH_DATE_IN_ALTERNATIVE_CALENDAR), alias: "PatientBirthDateInAlternativeCalendar", vr: Exact(LO), vm: "1" },
    E { tag: Single(PATIENT_DEATH_DATE_IN_ALTERNATIVE_CALENDAR), alias: "PatientDeathDateInAlternativeCalendar", vr: Exact(LO), vm: "1" },
    E { tag: Single(PATIENT_ALTERNATIVE_CALENDAR), alias: "PatientAlternativeCalendar", vr: Exact(CS), vm: "1" },
    E { tag: Single(PATIENT_SEX), alias: "PatientSex", vr: Exact(CS), vm: "1" },
    E { tag: Single(PATIENT_INSURANCE_PLAN_CODE_SEQUENCE), alias: "PatientInsurancePlanCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PATIENT_PRIMARY_LANGUAGE_CODE_SEQUENCE), alias: "PatientPrimaryLanguageCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PATIENT_PRIMARY_LANGUAGE_MODIFIER_CODE_SEQUENCE), alias: "PatientPrimaryLanguageModifierCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(QUALITY_CONTROL_SUBJECT), alias: "QualityControlSubject", vr: Exact(CS), vm: "1" },
    E { tag: Single(QUALITY_CONTROL_SUBJECT_TYPE_CODE_SEQUENCE), alias: "QualityControlSubjectTypeCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(STRAIN_DESCRIPTION), alias: "StrainDescription", vr: Exact(UC), vm: "1" },
    E { tag: Single(STRAIN_NOMENCLATURE), alias: "StrainNomenclature", vr: Exact(LO), vm: "1" },
    E { tag: Single(STRAIN_STOCK_NUMBER), alias: "StrainStockNumber", vr: Exact(LO), vm: "1" },
    E { tag: Single(STRAIN_SOURCE_REGISTRY_CODE_SEQUENCE), alias: "StrainSourceRegistryCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(STRAIN_STOCK_SEQUENCE), alias: "StrainStockSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(STRAIN_SOURCE), alias: "StrainSource", vr: Exact(LO), vm: "1" },
    E { tag: Single(STRAIN_ADDITIONAL_INFORMATION), alias: "StrainAdditionalInformation", vr: Exact(UT), vm: "1" },
    E { tag: Single(STRAIN_CODE_SEQUENCE), alias: "StrainCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(GENETIC_MODIFICATIONS_SEQUENCE), alias: "GeneticModificationsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(GENETIC_MODIFICATIONS_DESCRIPTION), alias: "GeneticModificationsDescription", vr: Exact(UC), vm: "1" },
    E { tag: Single(GENETIC_MODIFICATIONS_NOMENCLATURE), alias: "GeneticModificationsNomenclature", vr: Exact(LO), vm: "1" },
    E { tag: Single(GENETIC_MODIFICATIONS_CODE_SEQUENCE), alias: "GeneticModificationsCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(OTHER_PATIENT_IDS), alias: "OtherPatientIDs", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(OTHER_PATIENT_NAMES), alias: "OtherPatientNames", vr: Exact(PN), vm: "1-n" },
    E { tag: Single(OTHER_PATIENT_IDS_SEQUENCE), alias: "OtherPatientIDsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PATIENT_BIRTH_NAME), alias: "PatientBirthName", vr: Exact(PN), vm: "1" },
    E { tag: Single(PATIENT_AGE), alias: "PatientAge", vr: Exact(AS), vm: "1" },
    E { tag: Single(PATIENT_SIZE), alias: "PatientSize", vr: Exact(DS), vm: "1" },
    E { tag: Single(PATIENT_SIZE_CODE_SEQUENCE), alias: "PatientSizeCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PATIENT_BODY_MASS_INDEX), alias: "PatientBodyMassIndex", vr: Exact(DS), vm: "1" },
    E { tag: Single(MEASURED_AP_DIMENSION), alias: "MeasuredAPDimension", vr: Exact(DS), vm: "1" },
    E { tag: Single(MEASURED_LATERAL_DIMENSION), alias: "MeasuredLateralDimension", vr: Exact(DS), vm: "1" },
    E { tag: Single(PATIENT_WEIGHT), alias: "PatientWeight", vr: Exact(DS), vm: "1" },
    E { tag: Single(PATIENT_ADDRESS), alias: "PatientAddress", vr: Exact(LO), vm: "1" },
    E { tag: Single(INSURANCE_PLAN_IDENTIFICATION), alias: "InsurancePlanIdentification", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(PATIENT_MOTHER_BIRTH_NAME), alias: "PatientMotherBirthName", vr: Exact(PN), vm: "1" },
    E { tag: Single(MILITARY_RANK), alias: "MilitaryRank", vr: Exact(LO), vm: "1" },
    E { tag: Single(BRANCH_OF_SERVICE), alias: "BranchOfService", vr: Exact(LO), vm: "1" },
    E { tag: Single(MEDICAL_RECORD_LOCATOR), alias: "MedicalRecordLocator", vr: Exact(LO), vm: "1" },
    E { tag: Single(REFERENCED_PATIENT_PHOTO_SEQUENCE), alias: "ReferencedPatientPhotoSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MEDICAL_ALERTS), alias: "MedicalAlerts", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(ALLERGIES), alias: "Allergies", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(COUNTRY_OF_RESIDENCE), alias: "CountryOfResidence", vr: Exact(LO), vm: "1" },
    E { tag: Single(REGION_OF_RESIDENCE), alias: "RegionOfResidence", vr: Exact(LO), vm: "1" },
    E { tag: Single(PATIENT_TELEPHONE_NUMBERS), alias: "PatientTelephoneNumbers", vr: Exact(SH), vm: "1-n" },
    E { tag: Single(PATIENT_TELECOM_INFORMATION), alias: "PatientTelecomInformation", vr: Exact(LT), vm: "1" },
    E { tag: Single(ETHNIC_GROUP), alias: "EthnicGroup", vr: Exact(SH), vm: "1" },
    E { tag: Single(OCCUPATION), alias: "Occupation", vr: Exact(SH), vm: "1" },
    E { tag: Single(SMOKING_STATUS), alias: "SmokingStatus", vr: Exact(CS), vm: "1" },
    E { tag: Single(ADDITIONAL_PATIENT_HISTORY), alias: "AdditionalPatientHistory", vr: Exact(LT), vm: "1" },
    E { tag: Single(PREGNANCY_STATUS), alias: "PregnancyStatus", vr: Exact(US), vm: "1" },
    E { tag: Single(LAST_MENSTRUAL_DATE), alias: "LastMenstrualDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(PATIENT_RELIGIOUS_PREFERENCE), alias: "PatientReligiousPreference", vr: Exact(LO), vm: "1" },
    E { tag: Single(PATIENT_SPECIES_DESCRIPTION), alias: "PatientSpeciesDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(PATIENT_SPECIES_CODE_SEQUENCE), alias: "PatientSpeciesCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PATIENT_SEX_NEUTERED), alias: "PatientSexNeutered", vr: Exact(CS), vm: "1" },
    E { tag: Single(ANATOMICAL_ORIENTATION_TYPE), alias: "AnatomicalOrientationType", vr: Exact(CS), vm: "1" },
    E { tag: Single(PATIENT_BREED_DESCRIPTION), alias: "PatientBreedDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(PATIENT_BREED_CODE_SEQUENCE), alias: "PatientBreedCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(BREED_REGISTRATION_SEQUENCE), alias: "BreedRegistrationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(BREED_REGISTRATION_NUMBER), alias: "BreedRegistrationNumber", vr: Exact(LO), vm: "1" },
    E { tag: Single(BREED_REGISTRY_CODE_SEQUENCE), alias: "BreedRegistryCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RESPONSIBLE_PERSON), alias: "ResponsiblePerson", vr: Exact(PN), vm: "1" },
    E { tag: Single(RESPONSIBLE_PERSON_ROLE), alias: "ResponsiblePersonRole", vr: Exact(CS), vm: "1" },
    E { tag: Single(RESPONSIBLE_ORGANIZATION), alias: "ResponsibleOrganization", vr: Exact(LO), vm: "1" },
    E { tag: Single(PATIENT_COMMENTS), alias: "PatientComments", vr: Exact(LT), vm: "1" },
    E { tag: Single(EXAMINED_BODY_THICKNESS), alias: "ExaminedBodyThickness", vr: Exact(FL), vm: "1" },
    E { tag: Single(CLINICAL_TRIAL_SPONSOR_NAME), alias: "ClinicalTrialSponsorName", vr: Exact(LO), vm: "1" },
    E { tag: Single(CLINICAL_TRIAL_PROTOCOL_ID), alias: "ClinicalTrialProtocolID", vr: Exact(LO), vm: "1" },
    E { tag: Single(CLINICAL_TRIAL_PROTOCOL_NAME), alias: "ClinicalTrialProtocolName", vr: Exact(LO), vm: "1" },
    E { tag: Single(CLINICAL_TRIAL_SITE_ID), alias: "ClinicalTrialSiteID", vr: Exact(LO), vm: "1" },
    E { tag: Single(CLINICAL_TRIAL_SITE_NAME), alias: "ClinicalTrialSiteName", vr: Exact(LO), vm: "1" },
    E { tag: Single(CLINICAL_TRIAL_SUBJECT_ID), alias: "ClinicalTrialSubjectID", vr: Exact(LO), vm: "1" },
    E { tag: Single(CLINICAL_TRIAL_SUBJECT_READING_ID), alias: "ClinicalTrialSubjectReadingID", vr: Exact(LO), vm: "1" },
    E { tag: Single(CLINICAL_TRIAL_TIME_POINT_ID), alias: "ClinicalTrialTimePointID", vr: Exact(LO), vm: "1" },
    E { tag: Single(CLINICAL_TRIAL_TIME_POINT_DESCRIPTION), alias: "ClinicalTrialTimePointDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(CLINICAL_TRIAL_COORDINATING_CENTER_NAME), alias: "ClinicalTrialCoordinatingCenterName", vr: Exact(LO), vm: "1" },
    E { tag: Single(PATIENT_IDENTITY_REMOVED), alias: "PatientIdentityRemoved", vr: Exact(CS), vm: "1" },
    E { tag: Single(DEIDENTIFICATION_METHOD), alias: "DeidentificationMethod", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(DEIDENTIFICATION_METHOD_CODE_SEQUENCE), alias: "DeidentificationMethodCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CLINICAL_TRIAL_SERIES_ID), alias: "ClinicalTrialSeriesID", vr: Exact(LO), vm: "1" },
    E { tag: Single(CLINICAL_TRIAL_SERIES_DESCRIPTION), alias: "ClinicalTrialSeriesDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(CLINICAL_TRIAL_PROTOCOL_ETHICS_COMMITTEE_NAME), alias: "ClinicalTrialProtocolEthicsCommitteeName", vr: Exact(LO), vm: "1" },
    E { tag: Single(CLINICAL_TRIAL_PROTOCOL_ETHICS_COMMITTEE_APPROVAL_NUMBER), alias: "ClinicalTrialProtocolEthicsCommitteeApprovalNumber", vr: Exact(LO), vm: "1" },
    E { tag: Single(CONSENT_FOR_CLINICAL_TRIAL_USE_SEQUENCE), alias: "ConsentForClinicalTrialUseSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DISTRIBUTION_TYPE), alias: "DistributionType", vr: Exact(CS), vm: "1" },
    E { tag: Single(CONSENT_FOR_DISTRIBUTION_FLAG), alias: "ConsentForDistributionFlag", vr: Exact(CS), vm: "1" },
    E { tag: Single(CONTRAST_BOLUS_AGENT), alias: "ContrastBolusAgent", vr: Exact(LO), vm: "1" },
    E { tag: Single(CONTRAST_BOLUS_AGENT_SEQUENCE), alias: "ContrastBolusAgentSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONTRAST_BOLUS_T1_RELAXIVITY), alias: "ContrastBolusT1Relaxivity", vr: Exact(FL), vm: "1" },
    E { tag: Single(CONTRAST_BOLUS_ADMINISTRATION_ROUTE_SEQUENCE), alias: "ContrastBolusAdministrationRouteSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(BODY_PART_EXAMINED), alias: "BodyPartExamined", vr: Exact(CS), vm: "1" },
    E { tag: Single(SCANNING_SEQUENCE), alias: "ScanningSequence", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(SEQUENCE_VARIANT), alias: "SequenceVariant", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(SCAN_OPTIONS), alias: "ScanOptions", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(MR_ACQUISITION_TYPE), alias: "MRAcquisitionType", vr: Exact(CS), vm: "1" },
    E { tag: Single(SEQUENCE_NAME), alias: "SequenceName", vr: Exact(SH), vm: "1" },
    E { tag: Single(ANGIO_FLAG), alias: "AngioFlag", vr: Exact(CS), vm: "1" },
    E { tag: Single(INTERVENTION_DRUG_INFORMATION_SEQUENCE), alias: "InterventionDrugInformationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(INTERVENTION_DRUG_STOP_TIME), alias: "InterventionDrugStopTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(INTERVENTION_DRUG_DOSE), alias: "InterventionDrugDose", vr: Exact(DS), vm: "1" },
    E { tag: Single(INTERVENTION_DRUG_CODE_SEQUENCE), alias: "InterventionDrugCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ADDITIONAL_DRUG_SEQUENCE), alias: "AdditionalDrugSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RADIONUCLIDE), alias: "Radionuclide", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(RADIOPHARMACEUTICAL), alias: "Radiopharmaceutical", vr: Exact(LO), vm: "1" },
    E { tag: Single(ENERGY_WINDOW_CENTERLINE), alias: "EnergyWindowCenterline", vr: Exact(DS), vm: "1" },
    E { tag: Single(ENERGY_WINDOW_TOTAL_WIDTH), alias: "EnergyWindowTotalWidth", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(INTERVENTION_DRUG_NAME), alias: "InterventionDrugName", vr: Exact(LO), vm: "1" },
    E { tag: Single(INTERVENTION_DRUG_START_TIME), alias: "InterventionDrugStartTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(INTERVENTION_SEQUENCE), alias: "InterventionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(INTERVENTION_STATUS), alias: "InterventionStatus", vr: Exact(CS), vm: "1" },
    E { tag: Single(INTERVENTION_DESCRIPTION), alias: "InterventionDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(CINE_RATE), alias: "CineRate", vr: Exact(IS), vm: "1" },
    E { tag: Single(INITIAL_CINE_RUN_STATE), alias: "InitialCineRunState", vr: Exact(CS), vm: "1" },
    E { tag: Single(SLICE_THICKNESS), alias: "SliceThickness", vr: Exact(DS), vm: "1" },
    E { tag: Single(KVP), alias: "KVP", vr: Exact(DS), vm: "1" },
    E { tag: Single(COUNTS_ACCUMULATED), alias: "CountsAccumulated", vr: Exact(IS), vm: "1" },
    E { tag: Single(ACQUISITION_TERMINATION_CONDITION), alias: "AcquisitionTerminationCondition", vr: Exact(CS), vm: "1" },
    E { tag: Single(EFFECTIVE_DURATION), alias: "EffectiveDuration", vr: Exact(DS), vm: "1" },
    E { tag: Single(ACQUISITION_START_CONDITION), alias: "AcquisitionStartCondition", vr: Exact(CS), vm: "1" },
    E { tag: Single(ACQUISITION_START_CONDITION_DATA), alias: "AcquisitionStartConditionData", vr: Exact(IS), vm: "1" },
    E { tag: Single(ACQUISITION_TERMINATION_CONDITION_DATA), alias: "AcquisitionTerminationConditionData", vr: Exact(IS), vm: "1" },
    E { tag: Single(REPETITION_TIME), alias: "RepetitionTime", vr: Exact(DS), vm: "1" },
    E { tag: Single(ECHO_TIME), alias: "EchoTime", vr: Exact(DS), vm: "1" },
    E { tag: Single(INVERSION_TIME), alias: "InversionTime", vr: Exact(DS), vm: "1" },
    E { tag: Single(NUMBER_OF_AVERAGES), alias: "NumberOfAverages", vr: Exact(DS), vm: "1" },
    E { tag: Single(IMAGING_FREQUENCY), alias: "ImagingFrequency", vr: Exact(DS), vm: "1" },
    E { tag: Single(IMAGED_NUCLEUS), alias: "ImagedNucleus", vr: Exact(SH), vm: "1" },
    E { tag: Single(ECHO_NUMBERS), alias: "EchoNumbers", vr: Exact(IS), vm: "1-n" },
    E { tag: Single(MAGNETIC_FIELD_STRENGTH), alias: "MagneticFieldStrength", vr: Exact(DS), vm: "1" },
    E { tag: Single(SPACING_BETWEEN_SLICES), alias: "SpacingBetweenSlices", vr: Exact(DS), vm: "1" },
    E { tag: Single(NUMBER_OF_PHASE_ENCODING_STEPS), alias: "NumberOfPhaseEncodingSteps", vr: Exact(IS), vm: "1" },
    E { tag: Single(DATA_COLLECTION_DIAMETER), alias: "DataCollectionDiameter", vr: Exact(DS), vm: "1" },
    E { tag: Single(ECHO_TRAIN_LENGTH), alias: "EchoTrainLength", vr: Exact(IS), vm: "1" },
    E { tag: Single(PERCENT_SAMPLING), alias: "PercentSampling", vr: Exact(DS), vm: "1" },
    E { tag: Single(PERCENT_PHASE_FIELD_OF_VIEW), alias: "PercentPhaseFieldOfView", vr: Exact(DS), vm: "1" },
    E { tag: Single(PIXEL_BANDWIDTH), alias: "PixelBandwidth", vr: Exact(DS), vm: "1" },
    E { tag: Single(DEVICE_SERIAL_NUMBER), alias: "DeviceSerialNumber", vr: Exact(LO), vm: "1" },
    E { tag: Single(DEVICE_UID), alias: "DeviceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(DEVICE_ID), alias: "DeviceID", vr: Exact(LO), vm: "1" },
    E { tag: Single(PLATE_ID), alias: "PlateID", vr: Exact(LO), vm: "1" },
    E { tag: Single(GENERATOR_ID), alias: "GeneratorID", vr: Exact(LO), vm: "1" },
    E { tag: Single(GRID_ID), alias: "GridID", vr: Exact(LO), vm: "1" },
    E { tag: Single(CASSETTE_ID), alias: "CassetteID", vr: Exact(LO), vm: "1" },
    E { tag: Single(GANTRY_ID), alias: "GantryID", vr: Exact(LO), vm: "1" },
    E { tag: Single(UNIQUE_DEVICE_IDENTIFIER), alias: "UniqueDeviceIdentifier", vr: Exact(UT), vm: "1" },
    E { tag: Single(UDI_SEQUENCE), alias: "UDISequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MANUFACTURER_DEVICE_CLASS_UID), alias: "ManufacturerDeviceClassUID", vr: Exact(UI), vm: "1-n" },
    E { tag: Single(SECONDARY_CAPTURE_DEVICE_ID), alias: "SecondaryCaptureDeviceID", vr: Exact(LO), vm: "1" },
    E { tag: Single(HARDCOPY_CREATION_DEVICE_ID), alias: "HardcopyCreationDeviceID", vr: Exact(LO), vm: "1" },
    E { tag: Single(DATE_OF_SECONDARY_CAPTURE), alias: "DateOfSecondaryCapture", vr: Exact(DA), vm: "1" },
    E { tag: Single(TIME_OF_SECONDARY_CAPTURE), alias: "TimeOfSecondaryCapture", vr: Exact(TM), vm: "1" },
    E { tag: Single(SECONDARY_CAPTURE_DEVICE_MANUFACTURER), alias: "SecondaryCaptureDeviceManufacturer", vr: Exact(LO), vm: "1" },
    E { tag: Single(HARDCOPY_DEVICE_MANUFACTURER), alias: "HardcopyDeviceManufacturer", vr: Exact(LO), vm: "1" },
    E { tag: Single(SECONDARY_CAPTURE_DEVICE_MANUFACTURER_MODEL_NAME), alias: "SecondaryCaptureDeviceManufacturerModelName", vr: Exact(LO), vm: "1" },
    E { tag: Single(SECONDARY_CAPTURE_DEVICE_SOFTWARE_VERSIONS), alias: "SecondaryCaptureDeviceSoftwareVersions", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(SOFTWARE_VERSIONS), alias: "SoftwareVersions", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(VIDEO_IMAGE_FORMAT_ACQUIRED), alias: "VideoImageFormatAcquired", vr: Exact(SH), vm: "1" },
    E { tag: Single(DIGITAL_IMAGE_FORMAT_ACQUIRED), alias: "DigitalImageFormatAcquired", vr: Exact(LO), vm: "1" },
    E { tag: Single(PROTOCOL_NAME), alias: "ProtocolName", vr: Exact(LO), vm: "1" },
    E { tag: Single(CONTRAST_BOLUS_ROUTE), alias: "ContrastBolusRoute", vr: Exact(LO), vm: "1" },
    E { tag: Single(CONTRAST_BOLUS_VOLUME), alias: "ContrastBolusVolume", vr: Exact(DS), vm: "1" },
    E { tag: Single(CONTRAST_BOLUS_START_TIME), alias: "ContrastBolusStartTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(CONTRAST_BOLUS_STOP_TIME), alias: "ContrastBolusStopTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(CONTRAST_BOLUS_TOTAL_DOSE), alias: "ContrastBolusTotalDose", vr: Exact(DS), vm: "1" },
    E { tag: Single(SYRINGE_COUNTS), alias: "SyringeCounts", vr: Exact(IS), vm: "1" },
    E { tag: Single(CONTRAST_FLOW_RATE), alias: "ContrastFlowRate", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(CONTRAST_FLOW_DURATION), alias: "ContrastFlowDuration", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(CONTRAST_BOLUS_INGREDIENT), alias: "ContrastBolusIngredient", vr: Exact(CS), vm: "1" },
    E { tag: Single(CONTRAST_BOLUS_INGREDIENT_CONCENTRATION), alias: "ContrastBolusIngredientConcentration", vr: Exact(DS), vm: "1" },
    E { tag: Single(SPATIAL_RESOLUTION), alias: "SpatialResolution", vr: Exact(DS), vm: "1" },
    E { tag: Single(TRIGGER_TIME), alias: "TriggerTime", vr: Exact(DS), vm: "1" },
    E { tag: Single(TRIGGER_SOURCE_OR_TYPE), alias: "TriggerSourceOrType", vr: Exact(LO), vm: "1" },
    E { tag: Single(NOMINAL_INTERVAL), alias: "NominalInterval", vr: Exact(IS), vm: "1" },
    E { tag: Single(FRAME_TIME), alias: "FrameTime", vr: Exact(DS), vm: "1" },
    E { tag: Single(CARDIAC_FRAMING_TYPE), alias: "CardiacFramingType", vr: Exact(LO), vm: "1" },
    E { tag: Single(FRAME_TIME_VECTOR), alias: "FrameTimeVector", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(FRAME_DELAY), alias: "FrameDelay", vr: Exact(DS), vm: "1" },
    E { tag: Single(IMAGE_TRIGGER_DELAY), alias: "ImageTriggerDelay", vr: Exact(DS), vm: "1" },
    E { tag: Single(MULTIPLEX_GROUP_TIME_OFFSET), alias: "MultiplexGroupTimeOffset", vr: Exact(DS), vm: "1" },
    E { tag: Single(TRIGGER_TIME_OFFSET), alias: "TriggerTimeOffset", vr: Exact(DS), vm: "1" },
    E { tag: Single(SYNCHRONIZATION_TRIGGER), alias: "SynchronizationTrigger", vr: Exact(CS), vm: "1" },
    E { tag: Single(SYNCHRONIZATION_CHANNEL), alias: "SynchronizationChannel", vr: Exact(US), vm: "2" },
    E { tag: Single(TRIGGER_SAMPLE_POSITION), alias: "TriggerSamplePosition", vr: Exact(UL), vm: "1" },
    E { tag: Single(RADIOPHARMACEUTICAL_ROUTE), alias: "RadiopharmaceuticalRoute", vr: Exact(LO), vm: "1" },
    E { tag: Single(RADIOPHARMACEUTICAL_VOLUME), alias: "RadiopharmaceuticalVolume", vr: Exact(DS), vm: "1" },
    E { tag: Single(RADIOPHARMACEUTICAL_START_TIME), alias: "RadiopharmaceuticalStartTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(RADIOPHARMACEUTICAL_STOP_TIME), alias: "RadiopharmaceuticalStopTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(RADIONUCLIDE_TOTAL_DOSE), alias: "RadionuclideTotalDose", vr: Exact(DS), vm: "1" },
    E { tag: Single(RADIONUCLIDE_HALF_LIFE), alias: "RadionuclideHalfLife", vr: Exact(DS), vm: "1" },
    E { tag: Single(RADIONUCLIDE_POSITRON_FRACTION), alias: "RadionuclidePositronFraction", vr: Exact(DS), vm: "1" },
    E { tag: Single(RADIOPHARMACEUTICAL_SPECIFIC_ACTIVITY), alias: "RadiopharmaceuticalSpecificActivity", vr: Exact(DS), vm: "1" },
    E { tag: Single(RADIOPHARMACEUTICAL_START_DATE_TIME), alias: "RadiopharmaceuticalStartDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(RADIOPHARMACEUTICAL_STOP_DATE_TIME), alias: "RadiopharmaceuticalStopDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(BEAT_REJECTION_FLAG), alias: "BeatRejectionFlag", vr: Exact(CS), vm: "1" },
    E { tag: Single(LOW_RR_VALUE), alias: "LowRRValue", vr: Exact(IS), vm: "1" },
    E { tag: Single(HIGH_RR_VALUE), alias: "HighRRValue", vr: Exact(IS), vm: "1" },
    E { tag: Single(INTERVALS_ACQUIRED), alias: "IntervalsAcquired", vr: Exact(IS), vm: "1" },
    E { tag: Single(INTERVALS_REJECTED), alias: "IntervalsRejected", vr: Exact(IS), vm: "1" },
    E { tag: Single(PVC_REJECTION), alias: "PVCRejection", vr: Exact(LO), vm: "1" },
    E { tag: Single(SKIP_BEATS), alias: "SkipBeats", vr: Exact(IS), vm: "1" },
    E { tag: Single(HEART_RATE), alias: "HeartRate", vr: Exact(IS), vm: "1" },
    E { tag: Single(CARDIAC_NUMBER_OF_IMAGES), alias: "CardiacNumberOfImages", vr: Exact(IS), vm: "1" },
    E { tag: Single(TRIGGER_WINDOW), alias: "TriggerWindow", vr: Exact(IS), vm: "1" },
    E { tag: Single(RECONSTRUCTION_DIAMETER), alias: "ReconstructionDiameter", vr: Exact(DS), vm: "1" },
    E { tag: Single(DISTANCE_SOURCE_TO_DETECTOR), alias: "DistanceSourceToDetector", vr: Exact(DS), vm: "1" },
    E { tag: Single(DISTANCE_SOURCE_TO_PATIENT), alias: "DistanceSourceToPatient", vr: Exact(DS), vm: "1" },
    E { tag: Single(ESTIMATED_RADIOGRAPHIC_MAGNIFICATION_FACTOR), alias: "EstimatedRadiographicMagnificationFactor", vr: Exact(DS), vm: "1" },
    E { tag: Single(GANTRY_DETECTOR_TILT), alias: "GantryDetectorTilt", vr: Exact(DS), vm: "1" },
    E { tag: Single(GANTRY_DETECTOR_SLEW), alias: "GantryDetectorSlew", vr: Exact(DS), vm: "1" },
    E { tag: Single(TABLE_HEIGHT), alias: "TableHeight", vr: Exact(DS), vm: "1" },
    E { tag: Single(TABLE_TRAVERSE), alias: "TableTraverse", vr: Exact(DS), vm: "1" },
    E { tag: Single(TABLE_MOTION), alias: "TableMotion", vr: Exact(CS), vm: "1" },
    E { tag: Single(TABLE_VERTICAL_INCREMENT), alias: "TableVerticalIncrement", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(TABLE_LATERAL_INCREMENT), alias: "TableLateralIncrement", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(TABLE_LONGITUDINAL_INCREMENT), alias: "TableLongitudinalIncrement", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(TABLE_ANGLE), alias: "TableAngle", vr: Exact(DS), vm: "1" },
    E { tag: Single(TABLE_TYPE), alias: "TableType", vr: Exact(CS), vm: "1" },
    E { tag: Single(ROTATION_DIRECTION), alias: "RotationDirection", vr: Exact(CS), vm: "1" },
    E { tag: Single(ANGULAR_POSITION), alias: "AngularPosition", vr: Exact(DS), vm: "1" },
    E { tag: Single(RADIAL_POSITION), alias: "RadialPosition", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(SCAN_ARC), alias: "ScanArc", vr: Exact(DS), vm: "1" },
    E { tag: Single(ANGULAR_STEP), alias: "AngularStep", vr: Exact(DS), vm: "1" },
    E { tag: Single(CENTER_OF_ROTATION_OFFSET), alias: "CenterOfRotationOffset", vr: Exact(DS), vm: "1" },
    E { tag: Single(ROTATION_OFFSET), alias: "RotationOffset", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(FIELD_OF_VIEW_SHAPE), alias: "FieldOfViewShape", vr: Exact(CS), vm: "1" },
    E { tag: Single(FIELD_OF_VIEW_DIMENSIONS), alias: "FieldOfViewDimensions", vr: Exact(IS), vm: "1-2" },
    E { tag: Single(EXPOSURE_TIME), alias: "ExposureTime", vr: Exact(IS), vm: "1" },
    E { tag: Single(X_RAY_TUBE_CURRENT), alias: "XRayTubeCurrent", vr: Exact(IS), vm: "1" },
    E { tag: Single(EXPOSURE), alias: "Exposure", vr: Exact(IS), vm: "1" },
    E { tag: Single(EXPOSURE_INU_AS), alias: "ExposureInuAs", vr: Exact(IS), vm: "1" },
    E { tag: Single(AVERAGE_PULSE_WIDTH), alias: "AveragePulseWidth", vr: Exact(DS), vm: "1" },
    E { tag: Single(RADIATION_SETTING), alias: "RadiationSetting", vr: Exact(CS), vm: "1" },
    E { tag: Single(RECTIFICATION_TYPE), alias: "RectificationType", vr: Exact(CS), vm: "1" },
    E { tag: Single(RADIATION_MODE), alias: "RadiationMode", vr: Exact(CS), vm: "1" },
    E { tag: Single(IMAGE_AND_FLUOROSCOPY_AREA_DOSE_PRODUCT), alias: "ImageAndFluoroscopyAreaDoseProduct", vr: Exact(DS), vm: "1" },
    E { tag: Single(FILTER_TYPE), alias: "FilterType", vr: Exact(SH), vm: "1" },
    E { tag: Single(TYPE_OF_FILTERS), alias: "TypeOfFilters", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(INTENSIFIER_SIZE), alias: "IntensifierSize", vr: Exact(DS), vm: "1" },
    E { tag: Single(IMAGER_PIXEL_SPACING), alias: "ImagerPixelSpacing", vr: Exact(DS), vm: "2" },
    E { tag: Single(GRID), alias: "Grid", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(GENERATOR_POWER), alias: "GeneratorPower", vr: Exact(IS), vm: "1" },
    E { tag: Single(COLLIMATOR_GRID_NAME), alias: "CollimatorGridName", vr: Exact(SH), vm: "1" },
    E { tag: Single(COLLIMATOR_TYPE), alias: "CollimatorType", vr: Exact(CS), vm: "1" },
    E { tag: Single(FOCAL_DISTANCE), alias: "FocalDistance", vr: Exact(IS), vm: "1-2" },
    E { tag: Single(X_FOCUS_CENTER), alias: "XFocusCenter", vr: Exact(DS), vm: "1-2" },
    E { tag: Single(Y_FOCUS_CENTER), alias: "YFocusCenter", vr: Exact(DS), vm: "1-2" },
    E { tag: Single(FOCAL_SPOTS), alias: "FocalSpots", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(ANODE_TARGET_MATERIAL), alias: "AnodeTargetMaterial", vr: Exact(CS), vm: "1" },
    E { tag: Single(BODY_PART_THICKNESS), alias: "BodyPartThickness", vr: Exact(DS), vm: "1" },
    E { tag: Single(COMPRESSION_FORCE), alias: "CompressionForce", vr: Exact(DS), vm: "1" },
    E { tag: Single(COMPRESSION_PRESSURE), alias: "CompressionPressure", vr: Exact(DS), vm: "1" },
    E { tag: Single(PADDLE_DESCRIPTION), alias: "PaddleDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(COMPRESSION_CONTACT_AREA), alias: "CompressionContactArea", vr: Exact(DS), vm: "1" },
    E { tag: Single(DATE_OF_LAST_CALIBRATION), alias: "DateOfLastCalibration", vr: Exact(DA), vm: "1-n" },
    E { tag: Single(TIME_OF_LAST_CALIBRATION), alias: "TimeOfLastCalibration", vr: Exact(TM), vm: "1-n" },
    E { tag: Single(DATE_TIME_OF_LAST_CALIBRATION), alias: "DateTimeOfLastCalibration", vr: Exact(DT), vm: "1" },
    E { tag: Single(CONVOLUTION_KERNEL), alias: "ConvolutionKernel", vr: Exact(SH), vm: "1-n" },
    E { tag: Single(UPPER_LOWER_PIXEL_VALUES), alias: "UpperLowerPixelValues", vr: Exact(IS), vm: "1-n" },
    E { tag: Single(ACTUAL_FRAME_DURATION), alias: "ActualFrameDuration", vr: Exact(IS), vm: "1" },
    E { tag: Single(COUNT_RATE), alias: "CountRate", vr: Exact(IS), vm: "1" },
    E { tag: Single(PREFERRED_PLAYBACK_SEQUENCING), alias: "PreferredPlaybackSequencing", vr: Exact(US), vm: "1" },
    E { tag: Single(RECEIVE_COIL_NAME), alias: "ReceiveCoilName", vr: Exact(SH), vm: "1" },
    E { tag: Single(TRANSMIT_COIL_NAME), alias: "TransmitCoilName", vr: Exact(SH), vm: "1" },
    E { tag: Single(PLATE_TYPE), alias: "PlateType", vr: Exact(SH), vm: "1" },
    E { tag: Single(PHOSPHOR_TYPE), alias: "PhosphorType", vr: Exact(LO), vm: "1" },
    E { tag: Single(WATER_EQUIVALENT_DIAMETER), alias: "WaterEquivalentDiameter", vr: Exact(FD), vm: "1" },
    E { tag: Single(WATER_EQUIVALENT_DIAMETER_CALCULATION_METHOD_CODE_SEQUENCE), alias: "WaterEquivalentDiameterCalculationMethodCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SCAN_VELOCITY), alias: "ScanVelocity", vr: Exact(DS), vm: "1" },
    E { tag: Single(WHOLE_BODY_TECHNIQUE), alias: "WholeBodyTechnique", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(SCAN_LENGTH), alias: "ScanLength", vr: Exact(IS), vm: "1" },
    E { tag: Single(ACQUISITION_MATRIX), alias: "AcquisitionMatrix", vr: Exact(US), vm: "4" },
    E { tag: Single(IN_PLANE_PHASE_ENCODING_DIRECTION), alias: "InPlanePhaseEncodingDirection", vr: Exact(CS), vm: "1" },
    E { tag: Single(FLIP_ANGLE), alias: "FlipAngle", vr: Exact(DS), vm: "1" },
    E { tag: Single(VARIABLE_FLIP_ANGLE_FLAG), alias: "VariableFlipAngleFlag", vr: Exact(CS), vm: "1" },
    E { tag: Single(SAR), alias: "SAR", vr: Exact(DS), vm: "1" },
    E { tag: Single(D_BDT), alias: "dBdt", vr: Exact(DS), vm: "1" },
    E { tag: Single(B1RMS), alias: "B1rms", vr: Exact(FL), vm: "1" },
    E { tag: Single(ACQUISITION_DEVICE_PROCESSING_DESCRIPTION), alias: "AcquisitionDeviceProcessingDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(ACQUISITION_DEVICE_PROCESSING_CODE), alias: "AcquisitionDeviceProcessingCode", vr: Exact(LO), vm: "1" },
    E { tag: Single(CASSETTE_ORIENTATION), alias: "CassetteOrientation", vr: Exact(CS), vm: "1" },
    E { tag: Single(CASSETTE_SIZE), alias: "CassetteSize", vr: Exact(CS), vm: "1" },
    E { tag: Single(EXPOSURES_ON_PLATE), alias: "ExposuresOnPlate", vr: Exact(US), vm: "1" },
    E { tag: Single(RELATIVE_X_RAY_EXPOSURE), alias: "RelativeXRayExposure", vr: Exact(IS), vm: "1" },
    E { tag: Single(EXPOSURE_INDEX), alias: "ExposureIndex", vr: Exact(DS), vm: "1" },
    E { tag: Single(TARGET_EXPOSURE_INDEX), alias: "TargetExposureIndex", vr: Exact(DS), vm: "1" },
    E { tag: Single(DEVIATION_INDEX), alias: "DeviationIndex", vr: Exact(DS), vm: "1" },
    E { tag: Single(COLUMN_ANGULATION), alias: "ColumnAngulation", vr: Exact(DS), vm: "1" },
    E { tag: Single(TOMO_LAYER_HEIGHT), alias: "TomoLayerHeight", vr: Exact(DS), vm: "1" },
    E { tag: Single(TOMO_ANGLE), alias: "TomoAngle", vr: Exact(DS), vm: "1" },
    E { tag: Single(TOMO_TIME), alias: "TomoTime", vr: Exact(DS), vm: "1" },
    E { tag: Single(TOMO_TYPE), alias: "TomoType", vr: Exact(CS), vm: "1" },
    E { tag: Single(TOMO_CLASS), alias: "TomoClass", vr: Exact(CS), vm: "1" },
    E { tag: Single(NUMBER_OF_TOMOSYNTHESIS_SOURCE_IMAGES), alias: "NumberOfTomosynthesisSourceImages", vr: Exact(IS), vm: "1" },
    E { tag: Single(POSITIONER_MOTION), alias: "PositionerMotion", vr: Exact(CS), vm: "1" },
    E { tag: Single(POSITIONER_TYPE), alias: "PositionerType", vr: Exact(CS), vm: "1" },
    E { tag: Single(POSITIONER_PRIMARY_ANGLE), alias: "PositionerPrimaryAngle", vr: Exact(DS), vm: "1" },
    E { tag: Single(POSITIONER_SECONDARY_ANGLE), alias: "PositionerSecondaryAngle", vr: Exact(DS), vm: "1" },
    E { tag: Single(POSITIONER_PRIMARY_ANGLE_INCREMENT), alias: "PositionerPrimaryAngleIncrement", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(POSITIONER_SECONDARY_ANGLE_INCREMENT), alias: "PositionerSecondaryAngleIncrement", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(DETECTOR_PRIMARY_ANGLE), alias: "DetectorPrimaryAngle", vr: Exact(DS), vm: "1" },
    E { tag: Single(DETECTOR_SECONDARY_ANGLE), alias: "DetectorSecondaryAngle", vr: Exact(DS), vm: "1" },
    E { tag: Single(SHUTTER_SHAPE), alias: "ShutterShape", vr: Exact(CS), vm: "1-3" },
    E { tag: Single(SHUTTER_LEFT_VERTICAL_EDGE), alias: "ShutterLeftVerticalEdge", vr: Exact(IS), vm: "1" },
    E { tag: Single(SHUTTER_RIGHT_VERTICAL_EDGE), alias: "ShutterRightVerticalEdge", vr: Exact(IS), vm: "1" },
    E { tag: Single(SHUTTER_UPPER_HORIZONTAL_EDGE), alias: "ShutterUpperHorizontalEdge", vr: Exact(IS), vm: "1" },
    E { tag: Single(SHUTTER_LOWER_HORIZONTAL_EDGE), alias: "ShutterLowerHorizontalEdge", vr: Exact(IS), vm: "1" },
    E { tag: Single(CENTER_OF_CIRCULAR_SHUTTER), alias: "CenterOfCircularShutter", vr: Exact(IS), vm: "2" },
    E { tag: Single(RADIUS_OF_CIRCULAR_SHUTTER), alias: "RadiusOfCircularShutter", vr: Exact(IS), vm: "1" },
    E { tag: Single(VERTICES_OF_THE_POLYGONAL_SHUTTER), alias: "VerticesOfThePolygonalShutter", vr: Exact(IS), vm: "2-2n" },
    E { tag: Single(SHUTTER_PRESENTATION_VALUE), alias: "ShutterPresentationValue", vr: Exact(US), vm: "1" },
    E { tag: Single(SHUTTER_OVERLAY_GROUP), alias: "ShutterOverlayGroup", vr: Exact(US), vm: "1" },
    E { tag: Single(SHUTTER_PRESENTATION_COLOR_CIE_LAB_VALUE), alias: "ShutterPresentationColorCIELabValue", vr: Exact(US), vm: "3" },
    E { tag: Single(COLLIMATOR_SHAPE), alias: "CollimatorShape", vr: Exact(CS), vm: "1-3" },
    E { tag: Single(COLLIMATOR_LEFT_VERTICAL_EDGE), alias: "CollimatorLeftVerticalEdge", vr: Exact(IS), vm: "1" },
    E { tag: Single(COLLIMATOR_RIGHT_VERTICAL_EDGE), alias: "CollimatorRightVerticalEdge", vr: Exact(IS), vm: "1" },
    E { tag: Single(COLLIMATOR_UPPER_HORIZONTAL_EDGE), alias: "CollimatorUpperHorizontalEdge", vr: Exact(IS), vm: "1" },
    E { tag: Single(COLLIMATOR_LOWER_HORIZONTAL_EDGE), alias: "CollimatorLowerHorizontalEdge", vr: Exact(IS), vm: "1" },
    E { tag: Single(CENTER_OF_CIRCULAR_COLLIMATOR), alias: "CenterOfCircularCollimator", vr: Exact(IS), vm: "2" },
    E { tag: Single(RADIUS_OF_CIRCULAR_COLLIMATOR), alias: "RadiusOfCircularCollimator", vr: Exact(IS), vm: "1" },
    E { tag: Single(VERTICES_OF_THE_POLYGONAL_COLLIMATOR), alias: "VerticesOfThePolygonalCollimator", vr: Exact(IS), vm: "2-2n" },
    E { tag: Single(ACQUISITION_TIME_SYNCHRONIZED), alias: "AcquisitionTimeSynchronized", vr: Exact(CS), vm: "1" },
    E { tag: Single(TIME_SOURCE), alias: "TimeSource", vr: Exact(SH), vm: "1" },
    E { tag: Single(TIME_DISTRIBUTION_PROTOCOL), alias: "TimeDistributionProtocol", vr: Exact(CS), vm: "1" },
    E { tag: Single(NTP_SOURCE_ADDRESS), alias: "NTPSourceAddress", vr: Exact(LO), vm: "1" },
    E { tag: Single(PAGE_NUMBER_VECTOR), alias: "PageNumberVector", vr: Exact(IS), vm: "1-n" },
    E { tag: Single(FRAME_LABEL_VECTOR), alias: "FrameLabelVector", vr: Exact(SH), vm: "1-n" },
    E { tag: Single(FRAME_PRIMARY_ANGLE_VECTOR), alias: "FramePrimaryAngleVector", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(FRAME_SECONDARY_ANGLE_VECTOR), alias: "FrameSecondaryAngleVector", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(SLICE_LOCATION_VECTOR), alias: "SliceLocationVector", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(DISPLAY_WINDOW_LABEL_VECTOR), alias: "DisplayWindowLabelVector", vr: Exact(SH), vm: "1-n" },
    E { tag: Single(NOMINAL_SCANNED_PIXEL_SPACING), alias: "NominalScannedPixelSpacing", vr: Exact(DS), vm: "2" },
    E { tag: Single(DIGITIZING_DEVICE_TRANSPORT_DIRECTION), alias: "DigitizingDeviceTransportDirection", vr: Exact(CS), vm: "1" },
    E { tag: Single(ROTATION_OF_SCANNED_FILM), alias: "RotationOfScannedFilm", vr: Exact(DS), vm: "1" },
    E { tag: Single(IVUS_ACQUISITION), alias: "IVUSAcquisition", vr: Exact(CS), vm: "1" },
    E { tag: Single(IVUS_PULLBACK_RATE), alias: "IVUSPullbackRate", vr: Exact(DS), vm: "1" },
    E { tag: Single(IVUS_GATED_RATE), alias: "IVUSGatedRate", vr: Exact(DS), vm: "1" },
    E { tag: Single(IVUS_PULLBACK_START_FRAME_NUMBER), alias: "IVUSPullbackStartFrameNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(IVUS_PULLBACK_STOP_FRAME_NUMBER), alias: "IVUSPullbackStopFrameNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(LESION_NUMBER), alias: "LesionNumber", vr: Exact(IS), vm: "1-n" },
    E { tag: Single(OUTPUT_POWER), alias: "OutputPower", vr: Exact(SH), vm: "1-n" },
    E { tag: Single(TRANSDUCER_DATA), alias: "TransducerData", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(FOCUS_DEPTH), alias: "FocusDepth", vr: Exact(DS), vm: "1" },
    E { tag: Single(PROCESSING_FUNCTION), alias: "ProcessingFunction", vr: Exact(LO), vm: "1" },
    E { tag: Single(MECHANICAL_INDEX), alias: "MechanicalIndex", vr: Exact(DS), vm: "1" },
    E { tag: Single(BONE_THERMAL_INDEX), alias: "BoneThermalIndex", vr: Exact(DS), vm: "1" },
    E { tag: Single(CRANIAL_THERMAL_INDEX), alias: "CranialThermalIndex", vr: Exact(DS), vm: "1" },
    E { tag: Single(SOFT_TISSUE_THERMAL_INDEX), alias: "SoftTissueThermalIndex", vr: Exact(DS), vm: "1" },
    E { tag: Single(SOFT_TISSUE_FOCUS_THERMAL_INDEX), alias: "SoftTissueFocusThermalIndex", vr: Exact(DS), vm: "1" },
    E { tag: Single(SOFT_TISSUE_SURFACE_THERMAL_INDEX), alias: "SoftTissueSurfaceThermalIndex", vr: Exact(DS), vm: "1" },
    E { tag: Single(DEPTH_OF_SCAN_FIELD), alias: "DepthOfScanField", vr: Exact(IS), vm: "1" },
    E { tag: Single(PATIENT_POSITION), alias: "PatientPosition", vr: Exact(CS), vm: "1" },
    E { tag: Single(VIEW_POSITION), alias: "ViewPosition", vr: Exact(CS), vm: "1" },
    E { tag: Single(PROJECTION_EPONYMOUS_NAME_CODE_SEQUENCE), alias: "ProjectionEponymousNameCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SENSITIVITY), alias: "Sensitivity", vr: Exact(DS), vm: "1" },
    E { tag: Single(SEQUENCE_OF_ULTRASOUND_REGIONS), alias: "SequenceOfUltrasoundRegions", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REGION_SPATIAL_FORMAT), alias: "RegionSpatialFormat", vr: Exact(US), vm: "1" },
    E { tag: Single(REGION_DATA_TYPE), alias: "RegionDataType", vr: Exact(US), vm: "1" },
    E { tag: Single(REGION_FLAGS), alias: "RegionFlags", vr: Exact(UL), vm: "1" },
    E { tag: Single(REGION_LOCATION_MIN_X0), alias: "RegionLocationMinX0", vr: Exact(UL), vm: "1" },
    E { tag: Single(REGION_LOCATION_MIN_Y0), alias: "RegionLocationMinY0", vr: Exact(UL), vm: "1" },
    E { tag: Single(REGION_LOCATION_MAX_X1), alias: "RegionLocationMaxX1", vr: Exact(UL), vm: "1" },
    E { tag: Single(REGION_LOCATION_MAX_Y1), alias: "RegionLocationMaxY1", vr: Exact(UL), vm: "1" },
    E { tag: Single(REFERENCE_PIXEL_X0), alias: "ReferencePixelX0", vr: Exact(SL), vm: "1" },
    E { tag: Single(REFERENCE_PIXEL_Y0), alias: "ReferencePixelY0", vr: Exact(SL), vm: "1" },
    E { tag: Single(PHYSICAL_UNITS_X_DIRECTION), alias: "PhysicalUnitsXDirection", vr: Exact(US), vm: "1" },
    E { tag: Single(PHYSICAL_UNITS_Y_DIRECTION), alias: "PhysicalUnitsYDirection", vr: Exact(US), vm: "1" },
    E { tag: Single(REFERENCE_PIXEL_PHYSICAL_VALUE_X), alias: "ReferencePixelPhysicalValueX", vr: Exact(FD), vm: "1" },
    E { tag: Single(REFERENCE_PIXEL_PHYSICAL_VALUE_Y), alias: "ReferencePixelPhysicalValueY", vr: Exact(FD), vm: "1" },
    E { tag: Single(PHYSICAL_DELTA_X), alias: "PhysicalDeltaX", vr: Exact(FD), vm: "1" },
    E { tag: Single(PHYSICAL_DELTA_Y), alias: "PhysicalDeltaY", vr: Exact(FD), vm: "1" },
    E { tag: Single(TRANSDUCER_FREQUENCY), alias: "TransducerFrequency", vr: Exact(UL), vm: "1" },
    E { tag: Single(TRANSDUCER_TYPE), alias: "TransducerType", vr: Exact(CS), vm: "1" },
    E { tag: Single(PULSE_REPETITION_FREQUENCY), alias: "PulseRepetitionFrequency", vr: Exact(UL), vm: "1" },
    E { tag: Single(DOPPLER_CORRECTION_ANGLE), alias: "DopplerCorrectionAngle", vr: Exact(FD), vm: "1" },
    E { tag: Single(STEERING_ANGLE), alias: "SteeringAngle", vr: Exact(FD), vm: "1" },
    E { tag: Single(DOPPLER_SAMPLE_VOLUME_X_POSITION), alias: "DopplerSampleVolumeXPosition", vr: Exact(SL), vm: "1" },
    E { tag: Single(DOPPLER_SAMPLE_VOLUME_Y_POSITION), alias: "DopplerSampleVolumeYPosition", vr: Exact(SL), vm: "1" },
    E { tag: Single(TM_LINE_POSITION_X0), alias: "TMLinePositionX0", vr: Exact(SL), vm: "1" },
    E { tag: Single(TM_LINE_POSITION_Y0), alias: "TMLinePositionY0", vr: Exact(SL), vm: "1" },
    E { tag: Single(TM_LINE_POSITION_X1), alias: "TMLinePositionX1", vr: Exact(SL), vm: "1" },
    E { tag: Single(TM_LINE_POSITION_Y1), alias: "TMLinePositionY1", vr: Exact(SL), vm: "1" },
    E { tag: Single(PIXEL_COMPONENT_ORGANIZATION), alias: "PixelComponentOrganization", vr: Exact(US), vm: "1" },
    E { tag: Single(PIXEL_COMPONENT_MASK), alias: "PixelComponentMask", vr: Exact(UL), vm: "1" },
    E { tag: Single(PIXEL_COMPONENT_RANGE_START), alias: "PixelComponentRangeStart", vr: Exact(UL), vm: "1" },
    E { tag: Single(PIXEL_COMPONENT_RANGE_STOP), alias: "PixelComponentRangeStop", vr: Exact(UL), vm: "1" },
    E { tag: Single(PIXEL_COMPONENT_PHYSICAL_UNITS), alias: "PixelComponentPhysicalUnits", vr: Exact(US), vm: "1" },
    E { tag: Single(PIXEL_COMPONENT_DATA_TYPE), alias: "PixelComponentDataType", vr: Exact(US), vm: "1" },
    E { tag: Single(NUMBER_OF_TABLE_BREAK_POINTS), alias: "NumberOfTableBreakPoints", vr: Exact(UL), vm: "1" },
    E { tag: Single(TABLE_OF_X_BREAK_POINTS), alias: "TableOfXBreakPoints", vr: Exact(UL), vm: "1-n" },
    E { tag: Single(TABLE_OF_Y_BREAK_POINTS), alias: "TableOfYBreakPoints", vr: Exact(FD), vm: "1-n" },
    E { tag: Single(NUMBER_OF_TABLE_ENTRIES), alias: "NumberOfTableEntries", vr: Exact(UL), vm: "1" },
    E { tag: Single(TABLE_OF_PIXEL_VALUES), alias: "TableOfPixelValues", vr: Exact(UL), vm: "1-n" },
    E { tag: Single(TABLE_OF_PARAMETER_VALUES), alias: "TableOfParameterValues", vr: Exact(FL), vm: "1-n" },
    E { tag: Single(R_WAVE_TIME_VECTOR), alias: "RWaveTimeVector", vr: Exact(FL), vm: "1-n" },
    E { tag: Single(DETECTOR_CONDITIONS_NOMINAL_FLAG), alias: "DetectorConditionsNominalFlag", vr: Exact(CS), vm: "1" },
    E { tag: Single(DETECTOR_TEMPERATURE), alias: "DetectorTemperature", vr: Exact(DS), vm: "1" },
    E { tag: Single(DETECTOR_TYPE), alias: "DetectorType", vr: Exact(CS), vm: "1" },
    E { tag: Single(DETECTOR_CONFIGURATION), alias: "DetectorConfiguration", vr: Exact(CS), vm: "1" },
    E { tag: Single(DETECTOR_DESCRIPTION), alias: "DetectorDescription", vr: Exact(LT), vm: "1" },
    E { tag: Single(DETECTOR_MODE), alias: "DetectorMode", vr: Exact(LT), vm: "1" },
    E { tag: Single(DETECTOR_ID), alias: "DetectorID", vr: Exact(SH), vm: "1" },
    E { tag: Single(DATE_OF_LAST_DETECTOR_CALIBRATION), alias: "DateOfLastDetectorCalibration", vr: Exact(DA), vm: "1" },
    E { tag: Single(TIME_OF_LAST_DETECTOR_CALIBRATION), alias: "TimeOfLastDetectorCalibration", vr: Exact(TM), vm: "1" },
    E { tag: Single(EXPOSURES_ON_DETECTOR_SINCE_LAST_CALIBRATION), alias: "ExposuresOnDetectorSinceLastCalibration", vr: Exact(IS), vm: "1" },
    E { tag: Single(EXPOSURES_ON_DETECTOR_SINCE_MANUFACTURED), alias: "ExposuresOnDetectorSinceManufactured", vr: Exact(IS), vm: "1" },
    E { tag: Single(DETECTOR_TIME_SINCE_LAST_EXPOSURE), alias: "DetectorTimeSinceLastExposure", vr: Exact(DS), vm: "1" },
    E { tag: Single(DETECTOR_ACTIVE_TIME), alias: "DetectorActiveTime", vr: Exact(DS), vm: "1" },
    E { tag: Single(DETECTOR_ACTIVATION_OFFSET_FROM_EXPOSURE), alias: "DetectorActivationOffsetFromExposure", vr: Exact(DS), vm: "1" },
    E { tag: Single(DETECTOR_BINNING), alias: "DetectorBinning", vr: Exact(DS), vm: "2" },
    E { tag: Single(DETECTOR_ELEMENT_PHYSICAL_SIZE), alias: "DetectorElementPhysicalSize", vr: Exact(DS), vm: "2" },
    E { tag: Single(DETECTOR_ELEMENT_SPACING), alias: "DetectorElementSpacing", vr: Exact(DS), vm: "2" },
    E { tag: Single(DETECTOR_ACTIVE_SHAPE), alias: "DetectorActiveShape", vr: Exact(CS), vm: "1" },
    E { tag: Single(DETECTOR_ACTIVE_DIMENSIONS), alias: "DetectorActiveDimensions", vr: Exact(DS), vm: "1-2" },
    E { tag: Single(DETECTOR_ACTIVE_ORIGIN), alias: "DetectorActiveOrigin", vr: Exact(DS), vm: "2" },
    E { tag: Single(DETECTOR_MANUFACTURER_NAME), alias: "DetectorManufacturerName", vr: Exact(LO), vm: "1" },
    E { tag: Single(DETECTOR_MANUFACTURER_MODEL_NAME), alias: "DetectorManufacturerModelName", vr: Exact(LO), vm: "1" },
    E { tag: Single(FIELD_OF_VIEW_ORIGIN), alias: "FieldOfViewOrigin", vr: Exact(DS), vm: "2" },
    E { tag: Single(FIELD_OF_VIEW_ROTATION), alias: "FieldOfViewRotation", vr: Exact(DS), vm: "1" },
    E { tag: Single(FIELD_OF_VIEW_HORIZONTAL_FLIP), alias: "FieldOfViewHorizontalFlip", vr: Exact(CS), vm: "1" },
    E { tag: Single(PIXEL_DATA_AREA_ORIGIN_RELATIVE_TO_FOV), alias: "PixelDataAreaOriginRelativeToFOV", vr: Exact(FL), vm: "2" },
    E { tag: Single(PIXEL_DATA_AREA_ROTATION_ANGLE_RELATIVE_TO_FOV), alias: "PixelDataAreaRotationAngleRelativeToFOV", vr: Exact(FL), vm: "1" },
    E { tag: Single(GRID_ABSORBING_MATERIAL), alias: "GridAbsorbingMaterial", vr: Exact(LT), vm: "1" },
    E { tag: Single(GRID_SPACING_MATERIAL), alias: "GridSpacingMaterial", vr: Exact(LT), vm: "1" },
    E { tag: Single(GRID_THICKNESS), alias: "GridThickness", vr: Exact(DS), vm: "1" },
    E { tag: Single(GRID_PITCH), alias: "GridPitch", vr: Exact(DS), vm: "1" },
    E { tag: Single(GRID_ASPECT_RATIO), alias: "GridAspectRatio", vr: Exact(IS), vm: "2" },
    E { tag: Single(GRID_PERIOD), alias: "GridPeriod", vr: Exact(DS), vm: "1" },
    E { tag: Single(GRID_FOCAL_DISTANCE), alias: "GridFocalDistance", vr: Exact(DS), vm: "1" },
    E { tag: Single(FILTER_MATERIAL), alias: "FilterMaterial", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(FILTER_THICKNESS_MINIMUM), alias: "FilterThicknessMinimum", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(FILTER_THICKNESS_MAXIMUM), alias: "FilterThicknessMaximum", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(FILTER_BEAM_PATH_LENGTH_MINIMUM), alias: "FilterBeamPathLengthMinimum", vr: Exact(FL), vm: "1-n" },
    E { tag: Single(FILTER_BEAM_PATH_LENGTH_MAXIMUM), alias: "FilterBeamPathLengthMaximum", vr: Exact(FL), vm: "1-n" },
    E { tag: Single(EXPOSURE_CONTROL_MODE), alias: "ExposureControlMode", vr: Exact(CS), vm: "1" },
    E { tag: Single(EXPOSURE_CONTROL_MODE_DESCRIPTION), alias: "ExposureControlModeDescription", vr: Exact(LT), vm: "1" },
    E { tag: Single(EXPOSURE_STATUS), alias: "ExposureStatus", vr: Exact(CS), vm: "1" },
    E { tag: Single(PHOTOTIMER_SETTING), alias: "PhototimerSetting", vr: Exact(DS), vm: "1" },
    E { tag: Single(EXPOSURE_TIME_INU_S), alias: "ExposureTimeInuS", vr: Exact(DS), vm: "1" },
    E { tag: Single(X_RAY_TUBE_CURRENT_INU_A), alias: "XRayTubeCurrentInuA", vr: Exact(DS), vm: "1" },
    E { tag: Single(CONTENT_QUALIFICATION), alias: "ContentQualification", vr: Exact(CS), vm: "1" },
    E { tag: Single(PULSE_SEQUENCE_NAME), alias: "PulseSequenceName", vr: Exact(SH), vm: "1" },
    E { tag: Single(MR_IMAGING_MODIFIER_SEQUENCE), alias: "MRImagingModifierSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ECHO_PULSE_SEQUENCE), alias: "EchoPulseSequence", vr: Exact(CS), vm: "1" },
    E { tag: Single(INVERSION_RECOVERY), alias: "InversionRecovery", vr: Exact(CS), vm: "1" },
    E { tag: Single(FLOW_COMPENSATION), alias: "FlowCompensation", vr: Exact(CS), vm: "1" },
    E { tag: Single(MULTIPLE_SPIN_ECHO), alias: "MultipleSpinEcho", vr: Exact(CS), vm: "1" },
    E { tag: Single(MULTI_PLANAR_EXCITATION), alias: "MultiPlanarExcitation", vr: Exact(CS), vm: "1" },
    E { tag: Single(PHASE_CONTRAST), alias: "PhaseContrast", vr: Exact(CS), vm: "1" },
    E { tag: Single(TIME_OF_FLIGHT_CONTRAST), alias: "TimeOfFlightContrast", vr: Exact(CS), vm: "1" },
    E { tag: Single(SPOILING), alias: "Spoiling", vr: Exact(CS), vm: "1" },
    E { tag: Single(STEADY_STATE_PULSE_SEQUENCE), alias: "SteadyStatePulseSequence", vr: Exact(CS), vm: "1" },
    E { tag: Single(ECHO_PLANAR_PULSE_SEQUENCE), alias: "EchoPlanarPulseSequence", vr: Exact(CS), vm: "1" },
    E { tag: Single(TAG_ANGLE_FIRST_AXIS), alias: "TagAngleFirstAxis", vr: Exact(FD), vm: "1" },
    E { tag: Single(MAGNETIZATION_TRANSFER), alias: "MagnetizationTransfer", vr: Exact(CS), vm: "1" },
    E { tag: Single(T2_PREPARATION), alias: "T2Preparation", vr: Exact(CS), vm: "1" },
    E { tag: Single(BLOOD_SIGNAL_NULLING), alias: "BloodSignalNulling", vr: Exact(CS), vm: "1" },
    E { tag: Single(SATURATION_RECOVERY), alias: "SaturationRecovery", vr: Exact(CS), vm: "1" },
    E { tag: Single(SPECTRALLY_SELECTED_SUPPRESSION), alias: "SpectrallySelectedSuppression", vr: Exact(CS), vm: "1" },
    E { tag: Single(SPECTRALLY_SELECTED_EXCITATION), alias: "SpectrallySelectedExcitation", vr: Exact(CS), vm: "1" },
    E { tag: Single(SPATIAL_PRESATURATION), alias: "SpatialPresaturation", vr: Exact(CS), vm: "1" },
    E { tag: Single(TAGGING), alias: "Tagging", vr: Exact(CS), vm: "1" },
    E { tag: Single(OVERSAMPLING_PHASE), alias: "OversamplingPhase", vr: Exact(CS), vm: "1" },
    E { tag: Single(TAG_SPACING_FIRST_DIMENSION), alias: "TagSpacingFirstDimension", vr: Exact(FD), vm: "1" },
    E { tag: Single(GEOMETRY_OF_K_SPACE_TRAVERSAL), alias: "GeometryOfKSpaceTraversal", vr: Exact(CS), vm: "1" },
    E { tag: Single(SEGMENTED_K_SPACE_TRAVERSAL), alias: "SegmentedKSpaceTraversal", vr: Exact(CS), vm: "1" },
    E { tag: Single(RECTILINEAR_PHASE_ENCODE_REORDERING), alias: "RectilinearPhaseEncodeReordering", vr: Exact(CS), vm: "1" },
    E { tag: Single(TAG_THICKNESS), alias: "TagThickness", vr: Exact(FD), vm: "1" },
    E { tag: Single(PARTIAL_FOURIER_DIRECTION), alias: "PartialFourierDirection", vr: Exact(CS), vm: "1" },
    E { tag: Single(CARDIAC_SYNCHRONIZATION_TECHNIQUE), alias: "CardiacSynchronizationTechnique", vr: Exact(CS), vm: "1" },
    E { tag: Single(RECEIVE_COIL_MANUFACTURER_NAME), alias: "ReceiveCoilManufacturerName", vr: Exact(LO), vm: "1" },
    E { tag: Single(MR_RECEIVE_COIL_SEQUENCE), alias: "MRReceiveCoilSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RECEIVE_COIL_TYPE), alias: "ReceiveCoilType", vr: Exact(CS), vm: "1" },
    E { tag: Single(QUADRATURE_RECEIVE_COIL), alias: "QuadratureReceiveCoil", vr: Exact(CS), vm: "1" },
    E { tag: Single(MULTI_COIL_DEFINITION_SEQUENCE), alias: "MultiCoilDefinitionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MULTI_COIL_CONFIGURATION), alias: "MultiCoilConfiguration", vr: Exact(LO), vm: "1" },
    E { tag: Single(MULTI_COIL_ELEMENT_NAME), alias: "MultiCoilElementName", vr: Exact(SH), vm: "1" },
    E { tag: Single(MULTI_COIL_ELEMENT_USED), alias: "MultiCoilElementUsed", vr: Exact(CS), vm: "1" },
    E { tag: Single(MR_TRANSMIT_COIL_SEQUENCE), alias: "MRTransmitCoilSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TRANSMIT_COIL_MANUFACTURER_NAME), alias: "TransmitCoilManufacturerName", vr: Exact(LO), vm: "1" },
    E { tag: Single(TRANSMIT_COIL_TYPE), alias: "TransmitCoilType", vr: Exact(CS), vm: "1" },
    E { tag: Single(SPECTRAL_WIDTH), alias: "SpectralWidth", vr: Exact(FD), vm: "1-2" },
    E { tag: Single(CHEMICAL_SHIFT_REFERENCE), alias: "ChemicalShiftReference", vr: Exact(FD), vm: "1-2" },
    E { tag: Single(VOLUME_LOCALIZATION_TECHNIQUE), alias: "VolumeLocalizationTechnique", vr: Exact(CS), vm: "1" },
    E { tag: Single(MR_ACQUISITION_FREQUENCY_ENCODING_STEPS), alias: "MRAcquisitionFrequencyEncodingSteps", vr: Exact(US), vm: "1" },
    E { tag: Single(DECOUPLING), alias: "Decoupling", vr: Exact(CS), vm: "1" },
    E { tag: Single(DECOUPLED_NUCLEUS), alias: "DecoupledNucleus", vr: Exact(CS), vm: "1-2" },
    E { tag: Single(DECOUPLING_FREQUENCY), alias: "DecouplingFrequency", vr: Exact(FD), vm: "1-2" },
    E { tag: Single(DECOUPLING_METHOD), alias: "DecouplingMethod", vr: Exact(CS), vm: "1" },
    E { tag: Single(DECOUPLING_CHEMICAL_SHIFT_REFERENCE), alias: "DecouplingChemicalShiftReference", vr: Exact(FD), vm: "1-2" },
    E { tag: Single(K_SPACE_FILTERING), alias: "KSpaceFiltering", vr: Exact(CS), vm: "1" },
    E { tag: Single(TIME_DOMAIN_FILTERING), alias: "TimeDomainFiltering", vr: Exact(CS), vm: "1-2" },
    E { tag: Single(NUMBER_OF_ZERO_FILLS), alias: "NumberOfZeroFills", vr: Exact(US), vm: "1-2" },
    E { tag: Single(BASELINE_CORRECTION), alias: "BaselineCorrection", vr: Exact(CS), vm: "1" },
    E { tag: Single(PARALLEL_REDUCTION_FACTOR_IN_PLANE), alias: "ParallelReductionFactorInPlane", vr: Exact(FD), vm: "1" },
    E { tag: Single(ACQUISITION_DURATION), alias: "AcquisitionDuration", vr: Exact(FD), vm: "1" },
    E { tag: Single(FRAME_ACQUISITION_DATE_TIME), alias: "FrameAcquisitionDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(DIFFUSION_DIRECTIONALITY), alias: "DiffusionDirectionality", vr: Exact(CS), vm: "1" },
    E { tag: Single(DIFFUSION_GRADIENT_DIRECTION_SEQUENCE), alias: "DiffusionGradientDirectionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PARALLEL_ACQUISITION), alias: "ParallelAcquisition", vr: Exact(CS), vm: "1" },
    E { tag: Single(PARALLEL_ACQUISITION_TECHNIQUE), alias: "ParallelAcquisitionTechnique", vr: Exact(CS), vm: "1" },
    E { tag: Single(INVERSION_TIMES), alias: "InversionTimes", vr: Exact(FD), vm: "1-n" },
    E { tag: Single(METABOLITE_MAP_DESCRIPTION), alias: "MetaboliteMapDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(PARTIAL_FOURIER), alias: "PartialFourier", vr: Exact(CS), vm: "1" },
    E { tag: Single(EFFECTIVE_ECHO_TIME), alias: "EffectiveEchoTime", vr: Exact(FD), vm: "1" },
    E { tag: Single(METABOLITE_MAP_CODE_SEQUENCE), alias: "MetaboliteMapCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CHEMICAL_SHIFT_SEQUENCE), alias: "ChemicalShiftSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CARDIAC_SIGNAL_SOURCE), alias: "CardiacSignalSource", vr: Exact(CS), vm: "1" },
    E { tag: Single(DIFFUSION_B_VALUE), alias: "DiffusionBValue", vr: Exact(FD), vm: "1" },
    E { tag: Single(DIFFUSION_GRADIENT_ORIENTATION), alias: "DiffusionGradientOrientation", vr: Exact(FD), vm: "3" },
    E { tag: Single(VELOCITY_ENCODING_DIRECTION), alias: "VelocityEncodingDirection", vr: Exact(FD), vm: "3" },
    E { tag: Single(VELOCITY_ENCODING_MINIMUM_VALUE), alias: "VelocityEncodingMinimumValue", vr: Exact(FD), vm: "1" },
    E { tag: Single(VELOCITY_ENCODING_ACQUISITION_SEQUENCE), alias: "VelocityEncodingAcquisitionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(NUMBER_OF_K_SPACE_TRAJECTORIES), alias: "NumberOfKSpaceTrajectories", vr: Exact(US), vm: "1" },
    E { tag: Single(COVERAGE_OF_K_SPACE), alias: "CoverageOfKSpace", vr: Exact(CS), vm: "1" },
    E { tag: Single(SPECTROSCOPY_ACQUISITION_PHASE_ROWS), alias: "SpectroscopyAcquisitionPhaseRows", vr: Exact(UL), vm: "1" },
    E { tag: Single(PARALLEL_REDUCTION_FACTOR_IN_PLANE_RETIRED), alias: "ParallelReductionFactorInPlaneRetired", vr: Exact(FD), vm: "1" },
    E { tag: Single(TRANSMITTER_FREQUENCY), alias: "TransmitterFrequency", vr: Exact(FD), vm: "1-2" },
    E { tag: Single(RESONANT_NUCLEUS), alias: "ResonantNucleus", vr: Exact(CS), vm: "1-2" },
    E { tag: Single(FREQUENCY_CORRECTION), alias: "FrequencyCorrection", vr: Exact(CS), vm: "1" },
    E { tag: Single(MR_SPECTROSCOPY_FOV_GEOMETRY_SEQUENCE), alias: "MRSpectroscopyFOVGeometrySequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SLAB_THICKNESS), alias: "SlabThickness", vr: Exact(FD), vm: "1" },
    E { tag: Single(SLAB_ORIENTATION), alias: "SlabOrientation", vr: Exact(FD), vm: "3" },
    E { tag: Single(MID_SLAB_POSITION), alias: "MidSlabPosition", vr: Exact(FD), vm: "3" },
    E { tag: Single(MR_SPATIAL_SATURATION_SEQUENCE), alias: "MRSpatialSaturationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MR_TIMING_AND_RELATED_PARAMETERS_SEQUENCE), alias: "MRTimingAndRelatedParametersSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MR_ECHO_SEQUENCE), alias: "MREchoSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MR_MODIFIER_SEQUENCE), alias: "MRModifierSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MR_DIFFUSION_SEQUENCE), alias: "MRDiffusionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CARDIAC_SYNCHRONIZATION_SEQUENCE), alias: "CardiacSynchronizationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MR_AVERAGES_SEQUENCE), alias: "MRAveragesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MRFOV_GEOMETRY_SEQUENCE), alias: "MRFOVGeometrySequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(VOLUME_LOCALIZATION_SEQUENCE), alias: "VolumeLocalizationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SPECTROSCOPY_ACQUISITION_DATA_COLUMNS), alias: "SpectroscopyAcquisitionDataColumns", vr: Exact(UL), vm: "1" },
    E { tag: Single(DIFFUSION_ANISOTROPY_TYPE), alias: "DiffusionAnisotropyType", vr: Exact(CS), vm: "1" },
    E { tag: Single(FRAME_REFERENCE_DATE_TIME), alias: "FrameReferenceDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(MR_METABOLITE_MAP_SEQUENCE), alias: "MRMetaboliteMapSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PARALLEL_REDUCTION_FACTOR_OUT_OF_PLANE), alias: "ParallelReductionFactorOutOfPlane", vr: Exact(FD), vm: "1" },
    E { tag: Single(SPECTROSCOPY_ACQUISITION_OUT_OF_PLANE_PHASE_STEPS), alias: "SpectroscopyAcquisitionOutOfPlanePhaseSteps", vr: Exact(UL), vm: "1" },
    E { tag: Single(BULK_MOTION_STATUS), alias: "BulkMotionStatus", vr: Exact(CS), vm: "1" },
    E { tag: Single(PARALLEL_REDUCTION_FACTOR_SECOND_IN_PLANE), alias: "ParallelReductionFactorSecondInPlane", vr: Exact(FD), vm: "1" },
    E { tag: Single(CARDIAC_BEAT_REJECTION_TECHNIQUE), alias: "CardiacBeatRejectionTechnique", vr: Exact(CS), vm: "1" },
    E { tag: Single(RESPIRATORY_MOTION_COMPENSATION_TECHNIQUE), alias: "RespiratoryMotionCompensationTechnique", vr: Exact(CS), vm: "1" },
    E { tag: Single(RESPIRATORY_SIGNAL_SOURCE), alias: "RespiratorySignalSource", vr: Exact(CS), vm: "1" },
    E { tag: Single(BULK_MOTION_COMPENSATION_TECHNIQUE), alias: "BulkMotionCompensationTechnique", vr: Exact(CS), vm: "1" },
    E { tag: Single(BULK_MOTION_SIGNAL_SOURCE), alias: "BulkMotionSignalSource", vr: Exact(CS), vm: "1" },
    E { tag: Single(APPLICABLE_SAFETY_STANDARD_AGENCY), alias: "ApplicableSafetyStandardAgency", vr: Exact(CS), vm: "1" },
    E { tag: Single(APPLICABLE_SAFETY_STANDARD_DESCRIPTION), alias: "ApplicableSafetyStandardDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(OPERATING_MODE_SEQUENCE), alias: "OperatingModeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(OPERATING_MODE_TYPE), alias: "OperatingModeType", vr: Exact(CS), vm: "1" },
    E { tag: Single(OPERATING_MODE), alias: "OperatingMode", vr: Exact(CS), vm: "1" },
    E { tag: Single(SPECIFIC_ABSORPTION_RATE_DEFINITION), alias: "SpecificAbsorptionRateDefinition", vr: Exact(CS), vm: "1" },
    E { tag: Single(GRADIENT_OUTPUT_TYPE), alias: "GradientOutputType", vr: Exact(CS), vm: "1" },
    E { tag: Single(SPECIFIC_ABSORPTION_RATE_VALUE), alias: "SpecificAbsorptionRateValue", vr: Exact(FD), vm: "1" },
    E { tag: Single(GRADIENT_OUTPUT), alias: "GradientOutput", vr: Exact(FD), vm: "1" },
    E { tag: Single(FLOW_COMPENSATION_DIRECTION), alias: "FlowCompensationDirection", vr: Exact(CS), vm: "1" },
    E { tag: Single(TAGGING_DELAY), alias: "TaggingDelay", vr: Exact(FD), vm: "1" },
    E { tag: Single(RESPIRATORY_MOTION_COMPENSATION_TECHNIQUE_DESCRIPTION), alias: "RespiratoryMotionCompensationTechniqueDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(RESPIRATORY_SIGNAL_SOURCE_ID), alias: "RespiratorySignalSourceID", vr: Exact(SH), vm: "1" },
    E { tag: Single(CHEMICAL_SHIFT_MINIMUM_INTEGRATION_LIMIT_IN_HZ), alias: "ChemicalShiftMinimumIntegrationLimitInHz", vr: Exact(FD), vm: "1" },
    E { tag: Single(CHEMICAL_SHIFT_MAXIMUM_INTEGRATION_LIMIT_IN_HZ), alias: "ChemicalShiftMaximumIntegrationLimitInHz", vr: Exact(FD), vm: "1" },
    E { tag: Single(MR_VELOCITY_ENCODING_SEQUENCE), alias: "MRVelocityEncodingSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(FIRST_ORDER_PHASE_CORRECTION), alias: "FirstOrderPhaseCorrection", vr: Exact(CS), vm: "1" },
    E { tag: Single(WATER_REFERENCED_PHASE_CORRECTION), alias: "WaterReferencedPhaseCorrection", vr: Exact(CS), vm: "1" },
    E { tag: Single(MR_SPECTROSCOPY_ACQUISITION_TYPE), alias: "MRSpectroscopyAcquisitionType", vr: Exact(CS), vm: "1" },
    E { tag: Single(RESPIRATORY_CYCLE_POSITION), alias: "RespiratoryCyclePosition", vr: Exact(CS), vm: "1" },
    E { tag: Single(VELOCITY_ENCODING_MAXIMUM_VALUE), alias: "VelocityEncodingMaximumValue", vr: Exact(FD), vm: "1" },
    E { tag: Single(TAG_SPACING_SECOND_DIMENSION), alias: "TagSpacingSecondDimension", vr: Exact(FD), vm: "1" },
    E { tag: Single(TAG_ANGLE_SECOND_AXIS), alias: "TagAngleSecondAxis", vr: Exact(SS), vm: "1" },
    E { tag: Single(FRAME_ACQUISITION_DURATION), alias: "FrameAcquisitionDuration", vr: Exact(FD), vm: "1" },
    E { tag: Single(MR_IMAGE_FRAME_TYPE_SEQUENCE), alias: "MRImageFrameTypeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MR_SPECTROSCOPY_FRAME_TYPE_SEQUENCE), alias: "MRSpectroscopyFrameTypeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MR_ACQUISITION_PHASE_ENCODING_STEPS_IN_PLANE), alias: "MRAcquisitionPhaseEncodingStepsInPlane", vr: Exact(US), vm: "1" },
    E { tag: Single(MR_ACQUISITION_PHASE_ENCODING_STEPS_OUT_OF_PLANE), alias: "MRAcquisitionPhaseEncodingStepsOutOfPlane", vr: Exact(US), vm: "1" },
    E { tag: Single(SPECTROSCOPY_ACQUISITION_PHASE_COLUMNS), alias: "SpectroscopyAcquisitionPhaseColumns", vr: Exact(UL), vm: "1" },
    E { tag: Single(CARDIAC_CYCLE_POSITION), alias: "CardiacCyclePosition", vr: Exact(CS), vm: "1" },
    E { tag: Single(SPECIFIC_ABSORPTION_RATE_SEQUENCE), alias: "SpecificAbsorptionRateSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RF_ECHO_TRAIN_LENGTH), alias: "RFEchoTrainLength", vr: Exact(US), vm: "1" },
    E { tag: Single(GRADIENT_ECHO_TRAIN_LENGTH), alias: "GradientEchoTrainLength", vr: Exact(US), vm: "1" },
    E { tag: Single(ARTERIAL_SPIN_LABELING_CONTRAST), alias: "ArterialSpinLabelingContrast", vr: Exact(CS), vm: "1" },
    E { tag: Single(MR_ARTERIAL_SPIN_LABELING_SEQUENCE), alias: "MRArterialSpinLabelingSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ASL_TECHNIQUE_DESCRIPTION), alias: "ASLTechniqueDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(ASL_SLAB_NUMBER), alias: "ASLSlabNumber", vr: Exact(US), vm: "1" },
    E { tag: Single(ASL_SLAB_THICKNESS), alias: "ASLSlabThickness", vr: Exact(FD), vm: "1" },
    E { tag: Single(ASL_SLAB_ORIENTATION), alias: "ASLSlabOrientation", vr: Exact(FD), vm: "3" },
    E { tag: Single(ASL_MID_SLAB_POSITION), alias: "ASLMidSlabPosition", vr: Exact(FD), vm: "3" },
    E { tag: Single(ASL_CONTEXT), alias: "ASLContext", vr: Exact(CS), vm: "1" },
    E { tag: Single(ASL_PULSE_TRAIN_DURATION), alias: "ASLPulseTrainDuration", vr: Exact(UL), vm: "1" },
    E { tag: Single(ASL_CRUSHER_FLAG), alias: "ASLCrusherFlag", vr: Exact(CS), vm: "1" },
    E { tag: Single(ASL_CRUSHER_FLOW_LIMIT), alias: "ASLCrusherFlowLimit", vr: Exact(FD), vm: "1" },
    E { tag: Single(ASL_CRUSHER_DESCRIPTION), alias: "ASLCrusherDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(ASL_BOLUS_CUTOFF_FLAG), alias: "ASLBolusCutoffFlag", vr: Exact(CS), vm: "1" },
    E { tag: Single(ASL_BOLUS_CUTOFF_TIMING_SEQUENCE), alias: "ASLBolusCutoffTimingSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ASL_BOLUS_CUTOFF_TECHNIQUE), alias: "ASLBolusCutoffTechnique", vr: Exact(LO), vm: "1" },
    E { tag: Single(ASL_BOLUS_CUTOFF_DELAY_TIME), alias: "ASLBolusCutoffDelayTime", vr: Exact(UL), vm: "1" },
    E { tag: Single(ASL_SLAB_SEQUENCE), alias: "ASLSlabSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CHEMICAL_SHIFT_MINIMUM_INTEGRATION_LIMIT_INPPM), alias: "ChemicalShiftMinimumIntegrationLimitInppm", vr: Exact(FD), vm: "1" },
    E { tag: Single(CHEMICAL_SHIFT_MAXIMUM_INTEGRATION_LIMIT_INPPM), alias: "ChemicalShiftMaximumIntegrationLimitInppm", vr: Exact(FD), vm: "1" },
    E { tag: Single(WATER_REFERENCE_ACQUISITION), alias: "WaterReferenceAcquisition", vr: Exact(CS), vm: "1" },
    E { tag: Single(ECHO_PEAK_POSITION), alias: "EchoPeakPosition", vr: Exact(IS), vm: "1" },
    E { tag: Single(CT_ACQUISITION_TYPE_SEQUENCE), alias: "CTAcquisitionTypeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ACQUISITION_TYPE), alias: "AcquisitionType", vr: Exact(CS), vm: "1" },
    E { tag: Single(TUBE_ANGLE), alias: "TubeAngle", vr: Exact(FD), vm: "1" },
    E { tag: Single(CT_ACQUISITION_DETAILS_SEQUENCE), alias: "CTAcquisitionDetailsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REVOLUTION_TIME), alias: "RevolutionTime", vr: Exact(FD), vm: "1" },
    E { tag: Single(SINGLE_COLLIMATION_WIDTH), alias: "SingleCollimationWidth", vr: Exact(FD), vm: "1" },
    E { tag: Single(TOTAL_COLLIMATION_WIDTH), alias: "TotalCollimationWidth", vr: Exact(FD), vm: "1" },
    E { tag: Single(CT_TABLE_DYNAMICS_SEQUENCE), alias: "CTTableDynamicsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TABLE_SPEED), alias: "TableSpeed", vr: Exact(FD), vm: "1" },
    E { tag: Single(TABLE_FEED_PER_ROTATION), alias: "TableFeedPerRotation", vr: Exact(FD), vm: "1" },
    E { tag: Single(SPIRAL_PITCH_FACTOR), alias: "SpiralPitchFactor", vr: Exact(FD), vm: "1" },
    E { tag: Single(CT_GEOMETRY_SEQUENCE), alias: "CTGeometrySequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DATA_COLLECTION_CENTER_PATIENT), alias: "DataCollectionCenterPatient", vr: Exact(FD), vm: "3" },
    E { tag: Single(CT_RECONSTRUCTION_SEQUENCE), alias: "CTReconstructionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RECONSTRUCTION_ALGORITHM), alias: "ReconstructionAlgorithm", vr: Exact(CS), vm: "1" },
    E { tag: Single(CONVOLUTION_KERNEL_GROUP), alias: "ConvolutionKernelGroup", vr: Exact(CS), vm: "1" },
    E { tag: Single(RECONSTRUCTION_FIELD_OF_VIEW), alias: "ReconstructionFieldOfView", vr: Exact(FD), vm: "2" },
    E { tag: Single(RECONSTRUCTION_TARGET_CENTER_PATIENT), alias: "ReconstructionTargetCenterPatient", vr: Exact(FD), vm: "3" },
    E { tag: Single(RECONSTRUCTION_ANGLE), alias: "ReconstructionAngle", vr: Exact(FD), vm: "1" },
    E { tag: Single(IMAGE_FILTER), alias: "ImageFilter", vr: Exact(SH), vm: "1" },
    E { tag: Single(CT_EXPOSURE_SEQUENCE), alias: "CTExposureSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RECONSTRUCTION_PIXEL_SPACING), alias: "ReconstructionPixelSpacing", vr: Exact(FD), vm: "2" },
    E { tag: Single(EXPOSURE_MODULATION_TYPE), alias: "ExposureModulationType", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(ESTIMATED_DOSE_SAVING), alias: "EstimatedDoseSaving", vr: Exact(FD), vm: "1" },
    E { tag: Single(CTX_RAY_DETAILS_SEQUENCE), alias: "CTXRayDetailsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CT_POSITION_SEQUENCE), alias: "CTPositionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TABLE_POSITION), alias: "TablePosition", vr: Exact(FD), vm: "1" },
    E { tag: Single(EXPOSURE_TIME_INMS), alias: "ExposureTimeInms", vr: Exact(FD), vm: "1" },
    E { tag: Single(CT_IMAGE_FRAME_TYPE_SEQUENCE), alias: "CTImageFrameTypeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(X_RAY_TUBE_CURRENT_INM_A), alias: "XRayTubeCurrentInmA", vr: Exact(FD), vm: "1" },
    E { tag: Single(EXPOSURE_INM_AS), alias: "ExposureInmAs", vr: Exact(FD), vm: "1" },
    E { tag: Single(CONSTANT_VOLUME_FLAG), alias: "ConstantVolumeFlag", vr: Exact(CS), vm: "1" },
    E { tag: Single(FLUOROSCOPY_FLAG), alias: "FluoroscopyFlag", vr: Exact(CS), vm: "1" },
    E { tag: Single(DISTANCE_SOURCE_TO_DATA_COLLECTION_CENTER), alias: "DistanceSourceToDataCollectionCenter", vr: Exact(FD), vm: "1" },
    E { tag: Single(CONTRAST_BOLUS_AGENT_NUMBER), alias: "ContrastBolusAgentNumber", vr: Exact(US), vm: "1" },
    E { tag: Single(CONTRAST_BOLUS_INGREDIENT_CODE_SEQUENCE), alias: "ContrastBolusIngredientCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONTRAST_ADMINISTRATION_PROFILE_SEQUENCE), alias: "ContrastAdministrationProfileSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONTRAST_BOLUS_USAGE_SEQUENCE), alias: "ContrastBolusUsageSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONTRAST_BOLUS_AGENT_ADMINISTERED), alias: "ContrastBolusAgentAdministered", vr: Exact(CS), vm: "1" },
    E { tag: Single(CONTRAST_BOLUS_AGENT_DETECTED), alias: "ContrastBolusAgentDetected", vr: Exact(CS), vm: "1" },
    E { tag: Single(CONTRAST_BOLUS_AGENT_PHASE), alias: "ContrastBolusAgentPhase", vr: Exact(CS), vm: "1" },
    E { tag: Single(CTD_IVOL), alias: "CTDIvol", vr: Exact(FD), vm: "1" },
    E { tag: Single(CTDI_PHANTOM_TYPE_CODE_SEQUENCE), alias: "CTDIPhantomTypeCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CALCIUM_SCORING_MASS_FACTOR_PATIENT), alias: "CalciumScoringMassFactorPatient", vr: Exact(FL), vm: "1" },
    E { tag: Single(CALCIUM_SCORING_MASS_FACTOR_DEVICE), alias: "CalciumScoringMassFactorDevice", vr: Exact(FL), vm: "3" },
    E { tag: Single(ENERGY_WEIGHTING_FACTOR), alias: "EnergyWeightingFactor", vr: Exact(FL), vm: "1" },
    E { tag: Single(CT_ADDITIONAL_X_RAY_SOURCE_SEQUENCE), alias: "CTAdditionalXRaySourceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PROJECTION_PIXEL_CALIBRATION_SEQUENCE), alias: "ProjectionPixelCalibrationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DISTANCE_SOURCE_TO_ISOCENTER), alias: "DistanceSourceToIsocenter", vr: Exact(FL), vm: "1" },
    E { tag: Single(DISTANCE_OBJECT_TO_TABLE_TOP), alias: "DistanceObjectToTableTop", vr: Exact(FL), vm: "1" },
    E { tag: Single(OBJECT_PIXEL_SPACING_IN_CENTER_OF_BEAM), alias: "ObjectPixelSpacingInCenterOfBeam", vr: Exact(FL), vm: "2" },
    E { tag: Single(POSITIONER_POSITION_SEQUENCE), alias: "PositionerPositionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TABLE_POSITION_SEQUENCE), alias: "TablePositionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(COLLIMATOR_SHAPE_SEQUENCE), alias: "CollimatorShapeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PLANES_IN_ACQUISITION), alias: "PlanesInAcquisition", vr: Exact(CS), vm: "1" },
    E { tag: Single(XAXRF_FRAME_CHARACTERISTICS_SEQUENCE), alias: "XAXRFFrameCharacteristicsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(FRAME_ACQUISITION_SEQUENCE), alias: "FrameAcquisitionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(X_RAY_RECEPTOR_TYPE), alias: "XRayReceptorType", vr: Exact(CS), vm: "1" },
    E { tag: Single(ACQUISITION_PROTOCOL_NAME), alias: "AcquisitionProtocolName", vr: Exact(LO), vm: "1" },
    E { tag: Single(ACQUISITION_PROTOCOL_DESCRIPTION), alias: "AcquisitionProtocolDescription", vr: Exact(LT), vm: "1" },
    E { tag: Single(CONTRAST_BOLUS_INGREDIENT_OPAQUE), alias: "ContrastBolusIngredientOpaque", vr: Exact(CS), vm: "1" },
    E { tag: Single(DISTANCE_RECEPTOR_PLANE_TO_DETECTOR_HOUSING), alias: "DistanceReceptorPlaneToDetectorHousing", vr: Exact(FL), vm: "1" },
    E { tag: Single(INTENSIFIER_ACTIVE_SHAPE), alias: "IntensifierActiveShape", vr: Exact(CS), vm: "1" },
    E { tag: Single(INTENSIFIER_ACTIVE_DIMENSIONS), alias: "IntensifierActiveDimensions", vr: Exact(FL), vm: "1-2" },
    E { tag: Single(PHYSICAL_DETECTOR_SIZE), alias: "PhysicalDetectorSize", vr: Exact(FL), vm: "2" },
    E { tag: Single(POSITION_OF_ISOCENTER_PROJECTION), alias: "PositionOfIsocenterProjection", vr: Exact(FL), vm: "2" },
    E { tag: Single(FIELD_OF_VIEW_SEQUENCE), alias: "FieldOfViewSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(FIELD_OF_VIEW_DESCRIPTION), alias: "FieldOfViewDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(EXPOSURE_CONTROL_SENSING_REGIONS_SEQUENCE), alias: "ExposureControlSensingRegionsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(EXPOSURE_CONTROL_SENSING_REGION_SHAPE), alias: "ExposureControlSensingRegionShape", vr: Exact(CS), vm: "1" },
    E { tag: Single(EXPOSURE_CONTROL_SENSING_REGION_LEFT_VERTICAL_EDGE), alias: "ExposureControlSensingRegionLeftVerticalEdge", vr: Exact(SS), vm: "1" },
    E { tag: Single(EXPOSURE_CONTROL_SENSING_REGION_RIGHT_VERTICAL_EDGE), alias: "ExposureControlSensingRegionRightVerticalEdge", vr: Exact(SS), vm: "1" },
    E { tag: Single(EXPOSURE_CONTROL_SENSING_REGION_UPPER_HORIZONTAL_EDGE), alias: "ExposureControlSensingRegionUpperHorizontalEdge", vr: Exact(SS), vm: "1" },
    E { tag: Single(EXPOSURE_CONTROL_SENSING_REGION_LOWER_HORIZONTAL_EDGE), alias: "ExposureControlSensingRegionLowerHorizontalEdge", vr: Exact(SS), vm: "1" },
    E { tag: Single(CENTER_OF_CIRCULAR_EXPOSURE_CONTROL_SENSING_REGION), alias: "CenterOfCircularExposureControlSensingRegion", vr: Exact(SS), vm: "2" },
    E { tag: Single(RADIUS_OF_CIRCULAR_EXPOSURE_CONTROL_SENSING_REGION), alias: "RadiusOfCircularExposureControlSensingRegion", vr: Exact(US), vm: "1" },
    E { tag: Single(VERTICES_OF_THE_POLYGONAL_EXPOSURE_CONTROL_SENSING_REGION), alias: "VerticesOfThePolygonalExposureControlSensingRegion", vr: Exact(SS), vm: "2-n" },
    E { tag: Single(COLUMN_ANGULATION_PATIENT), alias: "ColumnAngulationPatient", vr: Exact(FL), vm: "1" },
    E { tag: Single(BEAM_ANGLE), alias: "BeamAngle", vr: Exact(FL), vm: "1" },
    E { tag: Single(FRAME_DETECTOR_PARAMETERS_SEQUENCE), alias: "FrameDetectorParametersSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CALCULATED_ANATOMY_THICKNESS), alias: "CalculatedAnatomyThickness", vr: Exact(FL), vm: "1" },
    E { tag: Single(CALIBRATION_SEQUENCE), alias: "CalibrationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(OBJECT_THICKNESS_SEQUENCE), alias: "ObjectThicknessSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PLANE_IDENTIFICATION), alias: "PlaneIdentification", vr: Exact(CS), vm: "1" },
    E { tag: Single(FIELD_OF_VIEW_DIMENSIONS_IN_FLOAT), alias: "FieldOfViewDimensionsInFloat", vr: Exact(FL), vm: "1-2" },
    E { tag: Single(ISOCENTER_REFERENCE_SYSTEM_SEQUENCE), alias: "IsocenterReferenceSystemSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(POSITIONER_ISOCENTER_PRIMARY_ANGLE), alias: "PositionerIsocenterPrimaryAngle", vr: Exact(FL), vm: "1" },
    E { tag: Single(POSITIONER_ISOCENTER_SECONDARY_ANGLE), alias: "PositionerIsocenterSecondaryAngle", vr: Exact(FL), vm: "1" },
    E { tag: Single(POSITIONER_ISOCENTER_DETECTOR_ROTATION_ANGLE), alias: "PositionerIsocenterDetectorRotationAngle", vr: Exact(FL), vm: "1" },
    E { tag: Single(TABLE_X_POSITION_TO_ISOCENTER), alias: "TableXPositionToIsocenter", vr: Exact(FL), vm: "1" },
    E { tag: Single(TABLE_Y_POSITION_TO_ISOCENTER), alias: "TableYPositionToIsocenter", vr: Exact(FL), vm: "1" },
    E { tag: Single(TABLE_Z_POSITION_TO_ISOCENTER), alias: "TableZPositionToIsocenter", vr: Exact(FL), vm: "1" },
    E { tag: Single(TABLE_HORIZONTAL_ROTATION_ANGLE), alias: "TableHorizontalRotationAngle", vr: Exact(FL), vm: "1" },
    E { tag: Single(TABLE_HEAD_TILT_ANGLE), alias: "TableHeadTiltAngle", vr: Exact(FL), vm: "1" },
    E { tag: Single(TABLE_CRADLE_TILT_ANGLE), alias: "TableCradleTiltAngle", vr: Exact(FL), vm: "1" },
    E { tag: Single(FRAME_DISPLAY_SHUTTER_SEQUENCE), alias: "FrameDisplayShutterSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ACQUIRED_IMAGE_AREA_DOSE_PRODUCT), alias: "AcquiredImageAreaDoseProduct", vr: Exact(FL), vm: "1" },
    E { tag: Single(C_ARM_POSITIONER_TABLETOP_RELATIONSHIP), alias: "CArmPositionerTabletopRelationship", vr: Exact(CS), vm: "1" },
    E { tag: Single(X_RAY_GEOMETRY_SEQUENCE), alias: "XRayGeometrySequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(IRRADIATION_EVENT_IDENTIFICATION_SEQUENCE), alias: "IrradiationEventIdentificationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(X_RAY3_D_FRAME_TYPE_SEQUENCE), alias: "XRay3DFrameTypeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONTRIBUTING_SOURCES_SEQUENCE), alias: "ContributingSourcesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(X_RAY3_D_ACQUISITION_SEQUENCE), alias: "XRay3DAcquisitionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PRIMARY_POSITIONER_SCAN_ARC), alias: "PrimaryPositionerScanArc", vr: Exact(FL), vm: "1" },
    E { tag: Single(SECONDARY_POSITIONER_SCAN_ARC), alias: "SecondaryPositionerScanArc", vr: Exact(FL), vm: "1" },
    E { tag: Single(PRIMARY_POSITIONER_SCAN_START_ANGLE), alias: "PrimaryPositionerScanStartAngle", vr: Exact(FL), vm: "1" },
    E { tag: Single(SECONDARY_POSITIONER_SCAN_START_ANGLE), alias: "SecondaryPositionerScanStartAngle", vr: Exact(FL), vm: "1" },
    E { tag: Single(PRIMARY_POSITIONER_INCREMENT), alias: "PrimaryPositionerIncrement", vr: Exact(FL), vm: "1" },
    E { tag: Single(SECONDARY_POSITIONER_INCREMENT), alias: "SecondaryPositionerIncrement", vr: Exact(FL), vm: "1" },
    E { tag: Single(START_ACQUISITION_DATE_TIME), alias: "StartAcquisitionDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(END_ACQUISITION_DATE_TIME), alias: "EndAcquisitionDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(PRIMARY_POSITIONER_INCREMENT_SIGN), alias: "PrimaryPositionerIncrementSign", vr: Exact(SS), vm: "1" },
    E { tag: Single(SECONDARY_POSITIONER_INCREMENT_SIGN), alias: "SecondaryPositionerIncrementSign", vr: Exact(SS), vm: "1" },
    E { tag: Single(APPLICATION_NAME), alias: "ApplicationName", vr: Exact(LO), vm: "1" },
    E { tag: Single(APPLICATION_VERSION), alias: "ApplicationVersion", vr: Exact(LO), vm: "1" },
    E { tag: Single(APPLICATION_MANUFACTURER), alias: "ApplicationManufacturer", vr: Exact(LO), vm: "1" },
    E { tag: Single(ALGORITHM_TYPE), alias: "AlgorithmType", vr: Exact(CS), vm: "1" },
    E { tag: Single(ALGORITHM_DESCRIPTION), alias: "AlgorithmDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(X_RAY3_D_RECONSTRUCTION_SEQUENCE), alias: "XRay3DReconstructionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RECONSTRUCTION_DESCRIPTION), alias: "ReconstructionDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(PER_PROJECTION_ACQUISITION_SEQUENCE), alias: "PerProjectionAcquisitionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DIFFUSION_B_MATRIX_SEQUENCE), alias: "DiffusionBMatrixSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DIFFUSION_B_VALUE_XX), alias: "DiffusionBValueXX", vr: Exact(FD), vm: "1" },
    E { tag: Single(DIFFUSION_B_VALUE_XY), alias: "DiffusionBValueXY", vr: Exact(FD), vm: "1" },
    E { tag: Single(DIFFUSION_B_VALUE_XZ), alias: "DiffusionBValueXZ", vr: Exact(FD), vm: "1" },
    E { tag: Single(DIFFUSION_B_VALUE_YY), alias: "DiffusionBValueYY", vr: Exact(FD), vm: "1" },
    E { tag: Single(DIFFUSION_B_VALUE_YZ), alias: "DiffusionBValueYZ", vr: Exact(FD), vm: "1" },
    E { tag: Single(DIFFUSION_B_VALUE_ZZ), alias: "DiffusionBValueZZ", vr: Exact(FD), vm: "1" },
    E { tag: Single(DECAY_CORRECTION_DATE_TIME), alias: "DecayCorrectionDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(START_DENSITY_THRESHOLD), alias: "StartDensityThreshold", vr: Exact(FD), vm: "1" },
    E { tag: Single(START_RELATIVE_DENSITY_DIFFERENCE_THRESHOLD), alias: "StartRelativeDensityDifferenceThreshold", vr: Exact(FD), vm: "1" },
    E { tag: Single(START_CARDIAC_TRIGGER_COUNT_THRESHOLD), alias: "StartCardiacTriggerCountThreshold", vr: Exact(FD), vm: "1" },
    E { tag: Single(START_RESPIRATORY_TRIGGER_COUNT_THRESHOLD), alias: "StartRespiratoryTriggerCountThreshold", vr: Exact(FD), vm: "1" },
    E { tag: Single(TERMINATION_COUNTS_THRESHOLD), alias: "TerminationCountsThreshold", vr: Exact(FD), vm: "1" },
    E { tag: Single(TERMINATION_DENSITY_THRESHOLD), alias: "TerminationDensityThreshold", vr: Exact(FD), vm: "1" },
    E { tag: Single(TERMINATION_RELATIVE_DENSITY_THRESHOLD), alias: "TerminationRelativeDensityThreshold", vr: Exact(FD), vm: "1" },
    E { tag: Single(TERMINATION_TIME_THRESHOLD), alias: "TerminationTimeThreshold", vr: Exact(FD), vm: "1" },
    E { tag: Single(TERMINATION_CARDIAC_TRIGGER_COUNT_THRESHOLD), alias: "TerminationCardiacTriggerCountThreshold", vr: Exact(FD), vm: "1" },
    E { tag: Single(TERMINATION_RESPIRATORY_TRIGGER_COUNT_THRESHOLD), alias: "TerminationRespiratoryTriggerCountThreshold", vr: Exact(FD), vm: "1" },
    E { tag: Single(DETECTOR_GEOMETRY), alias: "DetectorGeometry", vr: Exact(CS), vm: "1" },
    E { tag: Single(TRANSVERSE_DETECTOR_SEPARATION), alias: "TransverseDetectorSeparation", vr: Exact(FD), vm: "1" },
    E { tag: Single(AXIAL_DETECTOR_DIMENSION), alias: "AxialDetectorDimension", vr: Exact(FD), vm: "1" },
    E { tag: Single(RADIOPHARMACEUTICAL_AGENT_NUMBER), alias: "RadiopharmaceuticalAgentNumber", vr: Exact(US), vm: "1" },
    E { tag: Single(PET_FRAME_ACQUISITION_SEQUENCE), alias: "PETFrameAcquisitionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PET_DETECTOR_MOTION_DETAILS_SEQUENCE), alias: "PETDetectorMotionDetailsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PET_TABLE_DYNAMICS_SEQUENCE), alias: "PETTableDynamicsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PET_POSITION_SEQUENCE), alias: "PETPositionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PET_FRAME_CORRECTION_FACTORS_SEQUENCE), alias: "PETFrameCorrectionFactorsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RADIOPHARMACEUTICAL_USAGE_SEQUENCE), alias: "RadiopharmaceuticalUsageSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ATTENUATION_CORRECTION_SOURCE), alias: "AttenuationCorrectionSource", vr: Exact(CS), vm: "1" },
    E { tag: Single(NUMBER_OF_ITERATIONS), alias: "NumberOfIterations", vr: Exact(US), vm: "1" },
    E { tag: Single(NUMBER_OF_SUBSETS), alias: "NumberOfSubsets", vr: Exact(US), vm: "1" },
    E { tag: Single(PET_RECONSTRUCTION_SEQUENCE), alias: "PETReconstructionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PET_FRAME_TYPE_SEQUENCE), alias: "PETFrameTypeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TIME_OF_FLIGHT_INFORMATION_USED), alias: "TimeOfFlightInformationUsed", vr: Exact(CS), vm: "1" },
    E { tag: Single(RECONSTRUCTION_TYPE), alias: "ReconstructionType", vr: Exact(CS), vm: "1" },
    E { tag: Single(DECAY_CORRECTED), alias: "DecayCorrected", vr: Exact(CS), vm: "1" },
    E { tag: Single(ATTENUATION_CORRECTED), alias: "AttenuationCorrected", vr: Exact(CS), vm: "1" },
    E { tag: Single(SCATTER_CORRECTED), alias: "ScatterCorrected", vr: Exact(CS), vm: "1" },
    E { tag: Single(DEAD_TIME_CORRECTED), alias: "DeadTimeCorrected", vr: Exact(CS), vm: "1" },
    E { tag: Single(GANTRY_MOTION_CORRECTED), alias: "GantryMotionCorrected", vr: Exact(CS), vm: "1" },
    E { tag: Single(PATIENT_MOTION_CORRECTED), alias: "PatientMotionCorrected", vr: Exact(CS), vm: "1" },
    E { tag: Single(COUNT_LOSS_NORMALIZATION_CORRECTED), alias: "CountLossNormalizationCorrected", vr: Exact(CS), vm: "1" },
    E { tag: Single(RANDOMS_CORRECTED), alias: "RandomsCorrected", vr: Exact(CS), vm: "1" },
    E { tag: Single(NON_UNIFORM_RADIAL_SAMPLING_CORRECTED), alias: "NonUniformRadialSamplingCorrected", vr: Exact(CS), vm: "1" },
    E { tag: Single(SENSITIVITY_CALIBRATED), alias: "SensitivityCalibrated", vr: Exact(CS), vm: "1" },
    E { tag: Single(DETECTOR_NORMALIZATION_CORRECTION), alias: "DetectorNormalizationCorrection", vr: Exact(CS), vm: "1" },
    E { tag: Single(ITERATIVE_RECONSTRUCTION_METHOD), alias: "IterativeReconstructionMethod", vr: Exact(CS), vm: "1" },
    E { tag: Single(ATTENUATION_CORRECTION_TEMPORAL_RELATIONSHIP), alias: "AttenuationCorrectionTemporalRelationship", vr: Exact(CS), vm: "1" },
    E { tag: Single(PATIENT_PHYSIOLOGICAL_STATE_SEQUENCE), alias: "PatientPhysiologicalStateSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PATIENT_PHYSIOLOGICAL_STATE_CODE_SEQUENCE), alias: "PatientPhysiologicalStateCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DEPTHS_OF_FOCUS), alias: "DepthsOfFocus", vr: Exact(FD), vm: "1-n" },
    E { tag: Single(EXCLUDED_INTERVALS_SEQUENCE), alias: "ExcludedIntervalsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(EXCLUSION_START_DATE_TIME), alias: "ExclusionStartDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(EXCLUSION_DURATION), alias: "ExclusionDuration", vr: Exact(FD), vm: "1" },
    E { tag: Single(US_IMAGE_DESCRIPTION_SEQUENCE), alias: "USImageDescriptionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(IMAGE_DATA_TYPE_SEQUENCE), alias: "ImageDataTypeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DATA_TYPE), alias: "DataType", vr: Exact(CS), vm: "1" },
    E { tag: Single(TRANSDUCER_SCAN_PATTERN_CODE_SEQUENCE), alias: "TransducerScanPatternCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ALIASED_DATA_TYPE), alias: "AliasedDataType", vr: Exact(CS), vm: "1" },
    E { tag: Single(POSITION_MEASURING_DEVICE_USED), alias: "PositionMeasuringDeviceUsed", vr: Exact(CS), vm: "1" },
    E { tag: Single(TRANSDUCER_GEOMETRY_CODE_SEQUENCE), alias: "TransducerGeometryCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TRANSDUCER_BEAM_STEERING_CODE_SEQUENCE), alias: "TransducerBeamSteeringCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TRANSDUCER_APPLICATION_CODE_SEQUENCE), alias: "TransducerApplicationCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONTRIBUTING_EQUIPMENT_SEQUENCE), alias: "ContributingEquipmentSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONTRIBUTION_DATE_TIME), alias: "ContributionDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(CONTRIBUTION_DESCRIPTION), alias: "ContributionDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(STUDY_INSTANCE_UID), alias: "StudyInstanceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(SERIES_INSTANCE_UID), alias: "SeriesInstanceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(STUDY_ID), alias: "StudyID", vr: Exact(SH), vm: "1" },
    E { tag: Single(SERIES_NUMBER), alias: "SeriesNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(ACQUISITION_NUMBER), alias: "AcquisitionNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(INSTANCE_NUMBER), alias: "InstanceNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(ISOTOPE_NUMBER), alias: "IsotopeNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(PHASE_NUMBER), alias: "PhaseNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(INTERVAL_NUMBER), alias: "IntervalNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(TIME_SLOT_NUMBER), alias: "TimeSlotNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(ANGLE_NUMBER), alias: "AngleNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(ITEM_NUMBER), alias: "ItemNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(PATIENT_ORIENTATION), alias: "PatientOrientation", vr: Exact(CS), vm: "2" },
    E { tag: Single(OVERLAY_NUMBER), alias: "OverlayNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(CURVE_NUMBER), alias: "CurveNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(LUT_NUMBER), alias: "LUTNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(PYRAMID_LABEL), alias: "PyramidLabel", vr: Exact(LO), vm: "1" },
    E { tag: Single(IMAGE_POSITION), alias: "ImagePosition", vr: Exact(DS), vm: "3" },
    E { tag: Single(IMAGE_POSITION_PATIENT), alias: "ImagePositionPatient", vr: Exact(DS), vm: "3" },
    E { tag: Single(IMAGE_ORIENTATION), alias: "ImageOrientation", vr: Exact(DS), vm: "6" },
    E { tag: Single(IMAGE_ORIENTATION_PATIENT), alias: "ImageOrientationPatient", vr: Exact(DS), vm: "6" },
    E { tag: Single(LOCATION), alias: "Location", vr: Exact(DS), vm: "1" },
    E { tag: Single(FRAME_OF_REFERENCE_UID), alias: "FrameOfReferenceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(LATERALITY), alias: "Laterality", vr: Exact(CS), vm: "1" },
    E { tag: Single(IMAGE_LATERALITY), alias: "ImageLaterality", vr: Exact(CS), vm: "1" },
    E { tag: Single(IMAGE_GEOMETRY_TYPE), alias: "ImageGeometryType", vr: Exact(LO), vm: "1" },
    E { tag: Single(MASKING_IMAGE), alias: "MaskingImage", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(REPORT_NUMBER), alias: "ReportNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(TEMPORAL_POSITION_IDENTIFIER), alias: "TemporalPositionIdentifier", vr: Exact(IS), vm: "1" },
    E { tag: Single(NUMBER_OF_TEMPORAL_POSITIONS), alias: "NumberOfTemporalPositions", vr: Exact(IS), vm: "1" },
    E { tag: Single(TEMPORAL_RESOLUTION), alias: "TemporalResolution", vr: Exact(DS), vm: "1" },
    E { tag: Single(SYNCHRONIZATION_FRAME_OF_REFERENCE_UID), alias: "SynchronizationFrameOfReferenceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(SOP_INSTANCE_UID_OF_CONCATENATION_SOURCE), alias: "SOPInstanceUIDOfConcatenationSource", vr: Exact(UI), vm: "1" },
    E { tag: Single(SERIES_IN_STUDY), alias: "SeriesInStudy", vr: Exact(IS), vm: "1" },
    E { tag: Single(ACQUISITIONS_IN_SERIES), alias: "AcquisitionsInSeries", vr: Exact(IS), vm: "1" },
    E { tag: Single(IMAGES_IN_ACQUISITION), alias: "ImagesInAcquisition", vr: Exact(IS), vm: "1" },
    E { tag: Single(IMAGES_IN_SERIES), alias: "ImagesInSeries", vr: Exact(IS), vm: "1" },
    E { tag: Single(ACQUISITIONS_IN_STUDY), alias: "AcquisitionsInStudy", vr: Exact(IS), vm: "1" },
    E { tag: Single(IMAGES_IN_STUDY), alias: "ImagesInStudy", vr: Exact(IS), vm: "1" },
    E { tag: Single(REFERENCE), alias: "Reference", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(TARGET_POSITION_REFERENCE_INDICATOR), alias: "TargetPositionReferenceIndicator", vr: Exact(LO), vm: "1" },
    E { tag: Single(POSITION_REFERENCE_INDICATOR), alias: "PositionReferenceIndicator", vr: Exact(LO), vm: "1" },
    E { tag: Single(SLICE_LOCATION), alias: "SliceLocation", vr: Exact(DS), vm: "1" },
    E { tag: Single(OTHER_STUDY_NUMBERS), alias: "OtherStudyNumbers", vr: Exact(IS), vm: "1-n" },
    E { tag: Single(NUMBER_OF_PATIENT_RELATED_STUDIES), alias: "NumberOfPatientRelatedStudies", vr: Exact(IS), vm: "1" },
    E { tag: Single(NUMBER_OF_PATIENT_RELATED_SERIES), alias: "NumberOfPatientRelatedSeries", vr: Exact(IS), vm: "1" },
    E { tag: Single(NUMBER_OF_PATIENT_RELATED_INSTANCES), alias: "NumberOfPatientRelatedInstances", vr: Exact(IS), vm: "1" },
    E { tag: Single(NUMBER_OF_STUDY_RELATED_SERIES), alias: "NumberOfStudyRelatedSeries", vr: Exact(IS), vm: "1" },
    E { tag: Single(NUMBER_OF_STUDY_RELATED_INSTANCES), alias: "NumberOfStudyRelatedInstances", vr: Exact(IS), vm: "1" },
    E { tag: Single(NUMBER_OF_SERIES_RELATED_INSTANCES), alias: "NumberOfSeriesRelatedInstances", vr: Exact(IS), vm: "1" },
    E { tag: Element100(SOURCE_IMAGE_IDS), alias: "SourceImageIDs", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(MODIFYING_DEVICE_ID), alias: "ModifyingDeviceID", vr: Exact(CS), vm: "1" },
    E { tag: Single(MODIFIED_IMAGE_ID), alias: "ModifiedImageID", vr: Exact(CS), vm: "1" },
    E { tag: Single(MODIFIED_IMAGE_DATE), alias: "ModifiedImageDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(MODIFYING_DEVICE_MANUFACTURER), alias: "ModifyingDeviceManufacturer", vr: Exact(LO), vm: "1" },
    E { tag: Single(MODIFIED_IMAGE_TIME), alias: "ModifiedImageTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(MODIFIED_IMAGE_DESCRIPTION), alias: "ModifiedImageDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(IMAGE_COMMENTS), alias: "ImageComments", vr: Exact(LT), vm: "1" },
    E { tag: Single(ORIGINAL_IMAGE_IDENTIFICATION), alias: "OriginalImageIdentification", vr: Exact(AT), vm: "1-n" },
    E { tag: Single(ORIGINAL_IMAGE_IDENTIFICATION_NOMENCLATURE), alias: "OriginalImageIdentificationNomenclature", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(STACK_ID), alias: "StackID", vr: Exact(SH), vm: "1" },
    E { tag: Single(IN_STACK_POSITION_NUMBER), alias: "InStackPositionNumber", vr: Exact(UL), vm: "1" },
    E { tag: Single(FRAME_ANATOMY_SEQUENCE), alias: "FrameAnatomySequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(FRAME_LATERALITY), alias: "FrameLaterality", vr: Exact(CS), vm: "1" },
    E { tag: Single(FRAME_CONTENT_SEQUENCE), alias: "FrameContentSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PLANE_POSITION_SEQUENCE), alias: "PlanePositionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PLANE_ORIENTATION_SEQUENCE), alias: "PlaneOrientationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TEMPORAL_POSITION_INDEX), alias: "TemporalPositionIndex", vr: Exact(UL), vm: "1" },
    E { tag: Single(NOMINAL_CARDIAC_TRIGGER_DELAY_TIME), alias: "NominalCardiacTriggerDelayTime", vr: Exact(FD), vm: "1" },
    E { tag: Single(NOMINAL_CARDIAC_TRIGGER_TIME_PRIOR_TO_R_PEAK), alias: "NominalCardiacTriggerTimePriorToRPeak", vr: Exact(FL), vm: "1" },
    E { tag: Single(ACTUAL_CARDIAC_TRIGGER_TIME_PRIOR_TO_R_PEAK), alias: "ActualCardiacTriggerTimePriorToRPeak", vr: Exact(FL), vm: "1" },
    E { tag: Single(FRAME_ACQUISITION_NUMBER), alias: "FrameAcquisitionNumber", vr: Exact(US), vm: "1" },
    E { tag: Single(DIMENSION_INDEX_VALUES), alias: "DimensionIndexValues", vr: Exact(UL), vm: "1-n" },
    E { tag: Single(FRAME_COMMENTS), alias: "FrameComments", vr: Exact(LT), vm: "1" },
    E { tag: Single(CONCATENATION_UID), alias: "ConcatenationUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(IN_CONCATENATION_NUMBER), alias: "InConcatenationNumber", vr: Exact(US), vm: "1" },
    E { tag: Single(IN_CONCATENATION_TOTAL_NUMBER), alias: "InConcatenationTotalNumber", vr: Exact(US), vm: "1" },
    E { tag: Single(DIMENSION_ORGANIZATION_UID), alias: "DimensionOrganizationUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(DIMENSION_INDEX_POINTER), alias: "DimensionIndexPointer", vr: Exact(AT), vm: "1" },
    E { tag: Single(FUNCTIONAL_GROUP_POINTER), alias: "FunctionalGroupPointer", vr: Exact(AT), vm: "1" },
    E { tag: Single(UNASSIGNED_SHARED_CONVERTED_ATTRIBUTES_SEQUENCE), alias: "UnassignedSharedConvertedAttributesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(UNASSIGNED_PER_FRAME_CONVERTED_ATTRIBUTES_SEQUENCE), alias: "UnassignedPerFrameConvertedAttributesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONVERSION_SOURCE_ATTRIBUTES_SEQUENCE), alias: "ConversionSourceAttributesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DIMENSION_INDEX_PRIVATE_CREATOR), alias: "DimensionIndexPrivateCreator", vr: Exact(LO), vm: "1" },
    E { tag: Single(DIMENSION_ORGANIZATION_SEQUENCE), alias: "DimensionOrganizationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DIMENSION_INDEX_SEQUENCE), alias: "DimensionIndexSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONCATENATION_FRAME_OFFSET_NUMBER), alias: "ConcatenationFrameOffsetNumber", vr: Exact(UL), vm: "1" },
    E { tag: Single(FUNCTIONAL_GROUP_PRIVATE_CREATOR), alias: "FunctionalGroupPrivateCreator", vr: Exact(LO), vm: "1" },
    E { tag: Single(NOMINAL_PERCENTAGE_OF_CARDIAC_PHASE), alias: "NominalPercentageOfCardiacPhase", vr: Exact(FL), vm: "1" },
    E { tag: Single(NOMINAL_PERCENTAGE_OF_RESPIRATORY_PHASE), alias: "NominalPercentageOfRespiratoryPhase", vr: Exact(FL), vm: "1" },
    E { tag: Single(STARTING_RESPIRATORY_AMPLITUDE), alias: "StartingRespiratoryAmplitude", vr: Exact(FL), vm: "1" },
    E { tag: Single(STARTING_RESPIRATORY_PHASE), alias: "StartingRespiratoryPhase", vr: Exact(CS), vm: "1" },
    E { tag: Single(ENDING_RESPIRATORY_AMPLITUDE), alias: "EndingRespiratoryAmplitude", vr: Exact(FL), vm: "1" },
    E { tag: Single(ENDING_RESPIRATORY_PHASE), alias: "EndingRespiratoryPhase", vr: Exact(CS), vm: "1" },
    E { tag: Single(RESPIRATORY_TRIGGER_TYPE), alias: "RespiratoryTriggerType", vr: Exact(CS), vm: "1" },
    E { tag: Single(RR_INTERVAL_TIME_NOMINAL), alias: "RRIntervalTimeNominal", vr: Exact(FD), vm: "1" },
    E { tag: Single(ACTUAL_CARDIAC_TRIGGER_DELAY_TIME), alias: "ActualCardiacTriggerDelayTime", vr: Exact(FD), vm: "1" },
    E { tag: Single(RESPIRATORY_SYNCHRONIZATION_SEQUENCE), alias: "RespiratorySynchronizationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RESPIRATORY_INTERVAL_TIME), alias: "RespiratoryIntervalTime", vr: Exact(FD), vm: "1" },
    E { tag: Single(NOMINAL_RESPIRATORY_TRIGGER_DELAY_TIME), alias: "NominalRespiratoryTriggerDelayTime", vr: Exact(FD), vm: "1" },
    E { tag: Single(RESPIRATORY_TRIGGER_DELAY_THRESHOLD), alias: "RespiratoryTriggerDelayThreshold", vr: Exact(FD), vm: "1" },
    E { tag: Single(ACTUAL_RESPIRATORY_TRIGGER_DELAY_TIME), alias: "ActualRespiratoryTriggerDelayTime", vr: Exact(FD), vm: "1" },
    E { tag: Single(IMAGE_POSITION_VOLUME), alias: "ImagePositionVolume", vr: Exact(FD), vm: "3" },
    E { tag: Single(IMAGE_ORIENTATION_VOLUME), alias: "ImageOrientationVolume", vr: Exact(FD), vm: "6" },
    E { tag: Single(ULTRASOUND_ACQUISITION_GEOMETRY), alias: "UltrasoundAcquisitionGeometry", vr: Exact(CS), vm: "1" },
    E { tag: Single(APEX_POSITION), alias: "ApexPosition", vr: Exact(FD), vm: "3" },
    E { tag: Single(VOLUME_TO_TRANSDUCER_MAPPING_MATRIX), alias: "VolumeToTransducerMappingMatrix", vr: Exact(FD), vm: "16" },
    E { tag: Single(VOLUME_TO_TABLE_MAPPING_MATRIX), alias: "VolumeToTableMappingMatrix", vr: Exact(FD), vm: "16" },
    E { tag: Single(VOLUME_TO_TRANSDUCER_RELATIONSHIP), alias: "VolumeToTransducerRelationship", vr: Exact(CS), vm: "1" },
    E { tag: Single(PATIENT_FRAME_OF_REFERENCE_SOURCE), alias: "PatientFrameOfReferenceSource", vr: Exact(CS), vm: "1" },
    E { tag: Single(TEMPORAL_POSITION_TIME_OFFSET), alias: "TemporalPositionTimeOffset", vr: Exact(FD), vm: "1" },
    E { tag: Single(PLANE_POSITION_VOLUME_SEQUENCE), alias: "PlanePositionVolumeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PLANE_ORIENTATION_VOLUME_SEQUENCE), alias: "PlaneOrientationVolumeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TEMPORAL_POSITION_SEQUENCE), alias: "TemporalPositionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DIMENSION_ORGANIZATION_TYPE), alias: "DimensionOrganizationType", vr: Exact(CS), vm: "1" },
    E { tag: Single(VOLUME_FRAME_OF_REFERENCE_UID), alias: "VolumeFrameOfReferenceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(TABLE_FRAME_OF_REFERENCE_UID), alias: "TableFrameOfReferenceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(DIMENSION_DESCRIPTION_LABEL), alias: "DimensionDescriptionLabel", vr: Exact(LO), vm: "1" },
    E { tag: Single(PATIENT_ORIENTATION_IN_FRAME_SEQUENCE), alias: "PatientOrientationInFrameSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(FRAME_LABEL), alias: "FrameLabel", vr: Exact(LO), vm: "1" },
    E { tag: Single(ACQUISITION_INDEX), alias: "AcquisitionIndex", vr: Exact(US), vm: "1-n" },
    E { tag: Single(CONTRIBUTING_SOP_INSTANCES_REFERENCE_SEQUENCE), alias: "ContributingSOPInstancesReferenceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RECONSTRUCTION_INDEX), alias: "ReconstructionIndex", vr: Exact(US), vm: "1" },
    E { tag: Single(SAMPLES_PER_PIXEL), alias: "SamplesPerPixel", vr: Exact(US), vm: "1" },
    E { tag: Single(SAMPLES_PER_PIXEL_USED), alias: "SamplesPerPixelUsed", vr: Exact(US), vm: "1" },
    E { tag: Single(PHOTOMETRIC_INTERPRETATION), alias: "PhotometricInterpretation", vr: Exact(CS), vm: "1" },
    E { tag: Single(IMAGE_DIMENSIONS), alias: "ImageDimensions", vr: Exact(US), vm: "1" },
    E { tag: Single(PLANAR_CONFIGURATION), alias: "PlanarConfiguration", vr: Exact(US), vm: "1" },
    E { tag: Single(NUMBER_OF_FRAMES), alias: "NumberOfFrames", vr: Exact(IS), vm: "1" },
    E { tag: Single(FRAME_INCREMENT_POINTER), alias: "FrameIncrementPointer", vr: Exact(AT), vm: "1-n" },
    E { tag: Single(FRAME_DIMENSION_POINTER), alias: "FrameDimensionPointer", vr: Exact(AT), vm: "1-n" },
    E { tag: Single(ROWS), alias: "Rows", vr: Exact(US), vm: "1" },
    E { tag: Single(COLUMNS), alias: "Columns", vr: Exact(US), vm: "1" },
    E { tag: Single(PLANES), alias: "Planes", vr: Exact(US), vm: "1" },
    E { tag: Single(ULTRASOUND_COLOR_DATA_PRESENT), alias: "UltrasoundColorDataPresent", vr: Exact(US), vm: "1" },
    E { tag: Single(PIXEL_SPACING), alias: "PixelSpacing", vr: Exact(DS), vm: "2" },
    E { tag: Single(ZOOM_FACTOR), alias: "ZoomFactor", vr: Exact(DS), vm: "2" },
    E { tag: Single(ZOOM_CENTER), alias: "ZoomCenter", vr: Exact(DS), vm: "2" },
    E { tag: Single(PIXEL_ASPECT_RATIO), alias: "PixelAspectRatio", vr: Exact(IS), vm: "2" },
    E { tag: Single(IMAGE_FORMAT), alias: "ImageFormat", vr: Exact(CS), vm: "1" },
    E { tag: Single(MANIPULATED_IMAGE), alias: "ManipulatedImage", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(CORRECTED_IMAGE), alias: "CorrectedImage", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(COMPRESSION_RECOGNITION_CODE), alias: "CompressionRecognitionCode", vr: Exact(LO), vm: "1" },
    E { tag: Single(COMPRESSION_CODE), alias: "CompressionCode", vr: Exact(CS), vm: "1" },
    E { tag: Single(COMPRESSION_ORIGINATOR), alias: "CompressionOriginator", vr: Exact(SH), vm: "1" },
    E { tag: Single(COMPRESSION_LABEL), alias: "CompressionLabel", vr: Exact(LO), vm: "1" },
    E { tag: Single(COMPRESSION_DESCRIPTION), alias: "CompressionDescription", vr: Exact(SH), vm: "1" },
    E { tag: Single(COMPRESSION_SEQUENCE), alias: "CompressionSequence", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(COMPRESSION_STEP_POINTERS), alias: "CompressionStepPointers", vr: Exact(AT), vm: "1-n" },
    E { tag: Single(REPEAT_INTERVAL), alias: "RepeatInterval", vr: Exact(US), vm: "1" },
    E { tag: Single(BITS_GROUPED), alias: "BitsGrouped", vr: Exact(US), vm: "1" },
    E { tag: Single(PERIMETER_TABLE), alias: "PerimeterTable", vr: Exact(US), vm: "1-n" },
    E { tag: Single(PERIMETER_VALUE), alias: "PerimeterValue", vr: Xs, vm: "1" }, // US or SS
    E { tag: Single(PREDICTOR_ROWS), alias: "PredictorRows", vr: Exact(US), vm: "1" },
    E { tag: Single(PREDICTOR_COLUMNS), alias: "PredictorColumns", vr: Exact(US), vm: "1" },
    E { tag: Single(PREDICTOR_CONSTANTS), alias: "PredictorConstants", vr: Exact(US), vm: "1-n" },
    E { tag: Single(BLOCKED_PIXELS), alias: "BlockedPixels", vr: Exact(CS), vm: "1" },
    E { tag: Single(BLOCK_ROWS), alias: "BlockRows", vr: Exact(US), vm: "1" },
    E { tag: Single(BLOCK_COLUMNS), alias: "BlockColumns", vr: Exact(US), vm: "1" },
    E { tag: Single(ROW_OVERLAP), alias: "RowOverlap", vr: Exact(US), vm: "1" },
    E { tag: Single(COLUMN_OVERLAP), alias: "ColumnOverlap", vr: Exact(US), vm: "1" },
    E { tag: Single(BITS_ALLOCATED), alias: "BitsAllocated", vr: Exact(US), vm: "1" },
    E { tag: Single(BITS_STORED), alias: "BitsStored", vr: Exact(US), vm: "1" },
    E { tag: Single(HIGH_BIT), alias: "HighBit", vr: Exact(US), vm: "1" },
    E { tag: Single(PIXEL_REPRESENTATION), alias: "PixelRepresentation", vr: Exact(US), vm: "1" },
    E { tag: Single(SMALLEST_VALID_PIXEL_VALUE), alias: "SmallestValidPixelValue", vr: Xs, vm: "1" }, // US or SS
    E { tag: Single(LARGEST_VALID_PIXEL_VALUE), alias: "LargestValidPixelValue", vr: Xs, vm: "1" }, // US or SS
    E { tag: Single(SMALLEST_IMAGE_PIXEL_VALUE), alias: "SmallestImagePixelValue", vr: Xs, vm: "1" }, // US or SS
    E { tag: Single(LARGEST_IMAGE_PIXEL_VALUE), alias: "LargestImagePixelValue", vr: Xs, vm: "1" }, // US or SS
    E { tag: Single(SMALLEST_PIXEL_VALUE_IN_SERIES), alias: "SmallestPixelValueInSeries", vr: Xs, vm: "1" }, // US or SS
    E { tag: Single(LARGEST_PIXEL_VALUE_IN_SERIES), alias: "LargestPixelValueInSeries", vr: Xs, vm: "1" }, // US or SS
    E { tag: Single(SMALLEST_IMAGE_PIXEL_VALUE_IN_PLANE), alias: "SmallestImagePixelValueInPlane", vr: Xs, vm: "1" }, // US or SS
    E { tag: Single(LARGEST_IMAGE_PIXEL_VALUE_IN_PLANE), alias: "LargestImagePixelValueInPlane", vr: Xs, vm: "1" }, // US or SS
    E { tag: Single(PIXEL_PADDING_VALUE), alias: "PixelPaddingValue", vr: Xs, vm: "1" }, // US or SS
    E { tag: Single(PIXEL_PADDING_RANGE_LIMIT), alias: "PixelPaddingRangeLimit", vr: Xs, vm: "1" }, // US or SS
    E { tag: Single(FLOAT_PIXEL_PADDING_VALUE), alias: "FloatPixelPaddingValue", vr: Exact(FL), vm: "1" },
    E { tag: Single(DOUBLE_FLOAT_PIXEL_PADDING_VALUE), alias: "DoubleFloatPixelPaddingValue", vr: Exact(FD), vm: "1" },
    E { tag: Single(FLOAT_PIXEL_PADDING_RANGE_LIMIT), alias: "FloatPixelPaddingRangeLimit", vr: Exact(FL), vm: "1" },
    E { tag: Single(DOUBLE_FLOAT_PIXEL_PADDING_RANGE_LIMIT), alias: "DoubleFloatPixelPaddingRangeLimit", vr: Exact(FD), vm: "1" },
    E { tag: Single(IMAGE_LOCATION), alias: "ImageLocation", vr: Exact(US), vm: "1" },
    E { tag: Single(QUALITY_CONTROL_IMAGE), alias: "QualityControlImage", vr: Exact(CS), vm: "1" },
    E { tag: Single(BURNED_IN_ANNOTATION), alias: "BurnedInAnnotation", vr: Exact(CS), vm: "1" },
    E { tag: Single(RECOGNIZABLE_VISUAL_FEATURES), alias: "RecognizableVisualFeatures", vr: Exact(CS), vm: "1" },
    E { tag: Single(LONGITUDINAL_TEMPORAL_INFORMATION_MODIFIED), alias: "LongitudinalTemporalInformationModified", vr: Exact(CS), vm: "1" },
    E { tag: Single(REFERENCED_COLOR_PALETTE_INSTANCE_UID), alias: "ReferencedColorPaletteInstanceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(TRANSFORM_LABEL), alias: "TransformLabel", vr: Exact(LO), vm: "1" },
    E { tag: Single(TRANSFORM_VERSION_NUMBER), alias: "TransformVersionNumber", vr: Exact(LO), vm: "1" },
    E { tag: Single(NUMBER_OF_TRANSFORM_STEPS), alias: "NumberOfTransformSteps", vr: Exact(US), vm: "1" },
    E { tag: Single(SEQUENCE_OF_COMPRESSED_DATA), alias: "SequenceOfCompressedData", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(DETAILS_OF_COEFFICIENTS), alias: "DetailsOfCoefficients", vr: Exact(AT), vm: "1-n" },
    E { tag: Single(DCT_LABEL), alias: "DCTLabel", vr: Exact(LO), vm: "1" },
    E { tag: Single(DATA_BLOCK_DESCRIPTION), alias: "DataBlockDescription", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(DATA_BLOCK), alias: "DataBlock", vr: Exact(AT), vm: "1-n" },
    E { tag: Single(NORMALIZATION_FACTOR_FORMAT), alias: "NormalizationFactorFormat", vr: Exact(US), vm: "1" },
    E { tag: Single(ZONAL_MAP_NUMBER_FORMAT), alias: "ZonalMapNumberFormat", vr: Exact(US), vm: "1" },
    E { tag: Single(ZONAL_MAP_LOCATION), alias: "ZonalMapLocation", vr: Exact(AT), vm: "1-n" },
    E { tag: Single(ZONAL_MAP_FORMAT), alias: "ZonalMapFormat", vr: Exact(US), vm: "1" },
    E { tag: Single(ADAPTIVE_MAP_FORMAT), alias: "AdaptiveMapFormat", vr: Exact(US), vm: "1" },
    E { tag: Single(CODE_NUMBER_FORMAT), alias: "CodeNumberFormat", vr: Exact(US), vm: "1" },
    E { tag: Single(PIXEL_SPACING_CALIBRATION_TYPE), alias: "PixelSpacingCalibrationType", vr: Exact(CS), vm: "1" },
    E { tag: Single(PIXEL_SPACING_CALIBRATION_DESCRIPTION), alias: "PixelSpacingCalibrationDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(PIXEL_INTENSITY_RELATIONSHIP), alias: "PixelIntensityRelationship", vr: Exact(CS), vm: "1" },
    E { tag: Single(PIXEL_INTENSITY_RELATIONSHIP_SIGN), alias: "PixelIntensityRelationshipSign", vr: Exact(SS), vm: "1" },
    E { tag: Single(WINDOW_CENTER), alias: "WindowCenter", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(WINDOW_WIDTH), alias: "WindowWidth", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(RESCALE_INTERCEPT), alias: "RescaleIntercept", vr: Exact(DS), vm: "1" },
    E { tag: Single(RESCALE_SLOPE), alias: "RescaleSlope", vr: Exact(DS), vm: "1" },
    E { tag: Single(RESCALE_TYPE), alias: "RescaleType", vr: Exact(LO), vm: "1" },
    E { tag: Single(WINDOW_CENTER_WIDTH_EXPLANATION), alias: "WindowCenterWidthExplanation", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(VOILUT_FUNCTION), alias: "VOILUTFunction", vr: Exact(CS), vm: "1" },
    E { tag: Single(GRAY_SCALE), alias: "GrayScale", vr: Exact(CS), vm: "1" },
    E { tag: Single(RECOMMENDED_VIEWING_MODE), alias: "RecommendedViewingMode", vr: Exact(CS), vm: "1" },
    E { tag: Single(GRAY_LOOKUP_TABLE_DESCRIPTOR), alias: "GrayLookupTableDescriptor", vr: Xs, vm: "3" }, // US or SS
    E { tag: Single(RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "RedPaletteColorLookupTableDescriptor", vr: Xs, vm: "3" }, // US or SS
    E { tag: Single(GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "GreenPaletteColorLookupTableDescriptor", vr: Xs, vm: "3" }, // US or SS
    E { tag: Single(BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "BluePaletteColorLookupTableDescriptor", vr: Xs, vm: "3" }, // US or SS
    E { tag: Single(ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "AlphaPaletteColorLookupTableDescriptor", vr: Exact(US), vm: "3" },
    E { tag: Single(LARGE_RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "LargeRedPaletteColorLookupTableDescriptor", vr: Xs, vm: "4" }, // US or SS
    E { tag: Single(LARGE_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "LargeGreenPaletteColorLookupTableDescriptor", vr: Xs, vm: "4" }, // US or SS
    E { tag: Single(LARGE_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "LargeBluePaletteColorLookupTableDescriptor", vr: Xs, vm: "4" }, // US or SS
    E { tag: Single(PALETTE_COLOR_LOOKUP_TABLE_UID), alias: "PaletteColorLookupTableUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(RED_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "RedPaletteColorLookupTableData", vr: Exact(OW), vm: "1" },
    E { tag: Single(GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "GreenPaletteColorLookupTableData", vr: Exact(OW), vm: "1" },
    E { tag: Single(BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "BluePaletteColorLookupTableData", vr: Exact(OW), vm: "1" },
    E { tag: Single(ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "AlphaPaletteColorLookupTableData", vr: Exact(OW), vm: "1" },
    E { tag: Single(LARGE_RED_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "LargeRedPaletteColorLookupTableData", vr: Exact(OW), vm: "1" },
    E { tag: Single(LARGE_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "LargeGreenPaletteColorLookupTableData", vr: Exact(OW), vm: "1" },
    E { tag: Single(LARGE_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "LargeBluePaletteColorLookupTableData", vr: Exact(OW), vm: "1" },
    E { tag: Single(LARGE_PALETTE_COLOR_LOOKUP_TABLE_UID), alias: "LargePaletteColorLookupTableUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(SEGMENTED_RED_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "SegmentedRedPaletteColorLookupTableData", vr: Exact(OW), vm: "1" },
    E { tag: Single(SEGMENTED_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "SegmentedGreenPaletteColorLookupTableData", vr: Exact(OW), vm: "1" },
    E { tag: Single(SEGMENTED_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "SegmentedBluePaletteColorLookupTableData", vr: Exact(OW), vm: "1" },
    E { tag: Single(SEGMENTED_ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "SegmentedAlphaPaletteColorLookupTableData", vr: Exact(OW), vm: "1" },
    E { tag: Single(STORED_VALUE_COLOR_RANGE_SEQUENCE), alias: "StoredValueColorRangeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MINIMUM_STORED_VALUE_MAPPED), alias: "MinimumStoredValueMapped", vr: Exact(FD), vm: "1" },
    E { tag: Single(MAXIMUM_STORED_VALUE_MAPPED), alias: "MaximumStoredValueMapped", vr: Exact(FD), vm: "1" },
    E { tag: Single(BREAST_IMPLANT_PRESENT), alias: "BreastImplantPresent", vr: Exact(CS), vm: "1" },
    E { tag: Single(PARTIAL_VIEW), alias: "PartialView", vr: Exact(CS), vm: "1" },
    E { tag: Single(PARTIAL_VIEW_DESCRIPTION), alias: "PartialViewDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(PARTIAL_VIEW_CODE_SEQUENCE), alias: "PartialViewCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SPATIAL_LOCATIONS_PRESERVED), alias: "SpatialLocationsPreserved", vr: Exact(CS), vm: "1" },
    E { tag: Single(DATA_FRAME_ASSIGNMENT_SEQUENCE), alias: "DataFrameAssignmentSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DATA_PATH_ASSIGNMENT), alias: "DataPathAssignment", vr: Exact(CS), vm: "1" },
    E { tag: Single(BITS_MAPPED_TO_COLOR_LOOKUP_TABLE), alias: "BitsMappedToColorLookupTable", vr: Exact(US), vm: "1" },
    E { tag: Single(BLENDING_LUT1_SEQUENCE), alias: "BlendingLUT1Sequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(BLENDING_LUT1_TRANSFER_FUNCTION), alias: "BlendingLUT1TransferFunction", vr: Exact(CS), vm: "1" },
    E { tag: Single(BLENDING_WEIGHT_CONSTANT), alias: "BlendingWeightConstant", vr: Exact(FD), vm: "1" },
    E { tag: Single(BLENDING_LOOKUP_TABLE_DESCRIPTOR), alias: "BlendingLookupTableDescriptor", vr: Exact(US), vm: "3" },
    E { tag: Single(BLENDING_LOOKUP_TABLE_DATA), alias: "BlendingLookupTableData", vr: Exact(OW), vm: "1" },
    E { tag: Single(ENHANCED_PALETTE_COLOR_LOOKUP_TABLE_SEQUENCE), alias: "EnhancedPaletteColorLookupTableSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(BLENDING_LUT2_SEQUENCE), alias: "BlendingLUT2Sequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(BLENDING_LUT2_TRANSFER_FUNCTION), alias: "BlendingLUT2TransferFunction", vr: Exact(CS), vm: "1" },
    E { tag: Single(DATA_PATH_ID), alias: "DataPathID", vr: Exact(CS), vm: "1" },
    E { tag: Single(RGBLUT_TRANSFER_FUNCTION), alias: "RGBLUTTransferFunction", vr: Exact(CS), vm: "1" },
    E { tag: Single(ALPHA_LUT_TRANSFER_FUNCTION), alias: "AlphaLUTTransferFunction", vr: Exact(CS), vm: "1" },
    E { tag: Single(ICC_PROFILE), alias: "ICCProfile", vr: Exact(OB), vm: "1" },
    E { tag: Single(COLOR_SPACE), alias: "ColorSpace", vr: Exact(CS), vm: "1" },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION), alias: "LossyImageCompression", vr: Exact(CS), vm: "1" },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION_RATIO), alias: "LossyImageCompressionRatio", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION_METHOD), alias: "LossyImageCompressionMethod", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(MODALITY_LUT_SEQUENCE), alias: "ModalityLUTSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(VARIABLE_MODALITY_LUT_SEQUENCE), alias: "VariableModalityLUTSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(LUT_DESCRIPTOR), alias: "LUTDescriptor", vr: Xs, vm: "3" }, // US or SS
    E { tag: Single(LUT_EXPLANATION), alias: "LUTExplanation", vr: Exact(LO), vm: "1" },
    E { tag: Single(MODALITY_LUT_TYPE), alias: "ModalityLUTType", vr: Exact(LO), vm: "1" },
    E { tag: Single(LUT_DATA), alias: "LUTData", vr: Lt, vm: "1-n" }, // US or OW
    E { tag: Single(VOILUT_SEQUENCE), alias: "VOILUTSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SOFTCOPY_VOILUT_SEQUENCE), alias: "SoftcopyVOILUTSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(IMAGE_PRESENTATION_COMMENTS), alias: "ImagePresentationComments", vr: Exact(LT), vm: "1" },
    E { tag: Single(BI_PLANE_ACQUISITION_SEQUENCE), alias: "BiPlaneAcquisitionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REPRESENTATIVE_FRAME_NUMBER), alias: "RepresentativeFrameNumber", vr: Exact(US), vm: "1" },
    E { tag: Single(FRAME_NUMBERS_OF_INTEREST), alias: "FrameNumbersOfInterest", vr: Exact(US), vm: "1-n" },
    E { tag: Single(FRAME_OF_INTEREST_DESCRIPTION), alias: "FrameOfInterestDescription", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(FRAME_OF_INTEREST_TYPE), alias: "FrameOfInterestType", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(MASK_POINTERS), alias: "MaskPointers", vr: Exact(US), vm: "1-n" },
    E { tag: Single(R_WAVE_POINTER), alias: "RWavePointer", vr: Exact(US), vm: "1-n" },
    E { tag: Single(MASK_SUBTRACTION_SEQUENCE), alias: "MaskSubtractionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MASK_OPERATION), alias: "MaskOperation", vr: Exact(CS), vm: "1" },
    E { tag: Single(APPLICABLE_FRAME_RANGE), alias: "ApplicableFrameRange", vr: Exact(US), vm: "2-2n" },
    E { tag: Single(MASK_FRAME_NUMBERS), alias: "MaskFrameNumbers", vr: Exact(US), vm: "1-n" },
    E { tag: Single(CONTRAST_FRAME_AVERAGING), alias: "ContrastFrameAveraging", vr: Exact(US), vm: "1" },
    E { tag: Single(MASK_SUB_PIXEL_SHIFT), alias: "MaskSubPixelShift", vr: Exact(FL), vm: "2" },
    E { tag: Single(TID_OFFSET), alias: "TIDOffset", vr: Exact(SS), vm: "1" },
    E { tag: Single(MASK_OPERATION_EXPLANATION), alias: "MaskOperationExplanation", vr: Exact(ST), vm: "1" },
    E { tag: Single(DATA_POINT_ROWS), alias: "DataPointRows", vr: Exact(UL), vm: "1" },
    E { tag: Single(DATA_POINT_COLUMNS), alias: "DataPointColumns", vr: Exact(UL), vm: "1" },
    E { tag: Single(SIGNAL_DOMAIN_COLUMNS), alias: "SignalDomainColumns", vr: Exact(CS), vm: "1" },
    E { tag: Single(LARGEST_MONOCHROME_PIXEL_VALUE), alias: "LargestMonochromePixelValue", vr: Exact(US), vm: "1" },
    E { tag: Single(DATA_REPRESENTATION), alias: "DataRepresentation", vr: Exact(CS), vm: "1" },
    E { tag: Single(PIXEL_MEASURES_SEQUENCE), alias: "PixelMeasuresSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(FRAME_VOILUT_SEQUENCE), alias: "FrameVOILUTSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PIXEL_VALUE_TRANSFORMATION_SEQUENCE), alias: "PixelValueTransformationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SIGNAL_DOMAIN_ROWS), alias: "SignalDomainRows", vr: Exact(CS), vm: "1" },
    E { tag: Single(DISPLAY_FILTER_PERCENTAGE), alias: "DisplayFilterPercentage", vr: Exact(FL), vm: "1" },
    E { tag: Single(FRAME_PIXEL_SHIFT_SEQUENCE), alias: "FramePixelShiftSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SUBTRACTION_ITEM_ID), alias: "SubtractionItemID", vr: Exact(US), vm: "1" },
    E { tag: Single(PIXEL_INTENSITY_RELATIONSHIP_LUT_SEQUENCE), alias: "PixelIntensityRelationshipLUTSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(FRAME_PIXEL_DATA_PROPERTIES_SEQUENCE), alias: "FramePixelDataPropertiesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(GEOMETRICAL_PROPERTIES), alias: "GeometricalProperties", vr: Exact(CS), vm: "1" },
    E { tag: Single(GEOMETRIC_MAXIMUM_DISTORTION), alias: "GeometricMaximumDistortion", vr: Exact(FL), vm: "1" },
    E { tag: Single(IMAGE_PROCESSING_APPLIED), alias: "ImageProcessingApplied", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(MASK_SELECTION_MODE), alias: "MaskSelectionMode", vr: Exact(CS), vm: "1" },
    E { tag: Single(LUT_FUNCTION), alias: "LUTFunction", vr: Exact(CS), vm: "1" },
    E { tag: Single(MASK_VISIBILITY_PERCENTAGE), alias: "MaskVisibilityPercentage", vr: Exact(FL), vm: "1" },
    E { tag: Single(PIXEL_SHIFT_SEQUENCE), alias: "PixelShiftSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REGION_PIXEL_SHIFT_SEQUENCE), alias: "RegionPixelShiftSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(VERTICES_OF_THE_REGION), alias: "VerticesOfTheRegion", vr: Exact(SS), vm: "2-2n" },
    E { tag: Single(MULTI_FRAME_PRESENTATION_SEQUENCE), alias: "MultiFramePresentationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PIXEL_SHIFT_FRAME_RANGE), alias: "PixelShiftFrameRange", vr: Exact(US), vm: "2-2n" },
    E { tag: Single(LUT_FRAME_RANGE), alias: "LUTFrameRange", vr: Exact(US), vm: "2-2n" },
    E { tag: Single(IMAGE_TO_EQUIPMENT_MAPPING_MATRIX), alias: "ImageToEquipmentMappingMatrix", vr: Exact(DS), vm: "16" },
    E { tag: Single(EQUIPMENT_COORDINATE_SYSTEM_IDENTIFICATION), alias: "EquipmentCoordinateSystemIdentification", vr: Exact(CS), vm: "1" },
    E { tag: Single(STUDY_STATUS_ID), alias: "StudyStatusID", vr: Exact(CS), vm: "1" },
    E { tag: Single(STUDY_PRIORITY_ID), alias: "StudyPriorityID", vr: Exact(CS), vm: "1" },
    E { tag: Single(STUDY_ID_ISSUER), alias: "StudyIDIssuer", vr: Exact(LO), vm: "1" },
    E { tag: Single(STUDY_VERIFIED_DATE), alias: "StudyVerifiedDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(STUDY_VERIFIED_TIME), alias: "StudyVerifiedTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(STUDY_READ_DATE), alias: "StudyReadDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(STUDY_READ_TIME), alias: "StudyReadTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(SCHEDULED_STUDY_START_DATE), alias: "ScheduledStudyStartDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(SCHEDULED_STUDY_START_TIME), alias: "ScheduledStudyStartTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(SCHEDULED_STUDY_STOP_DATE), alias: "ScheduledStudyStopDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(SCHEDULED_STUDY_STOP_TIME), alias: "ScheduledStudyStopTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(SCHEDULED_STUDY_LOCATION), alias: "ScheduledStudyLocation", vr: Exact(LO), vm: "1" },
    E { tag: Single(SCHEDULED_STUDY_LOCATION_AE_TITLE), alias: "ScheduledStudyLocationAETitle", vr: Exact(AE), vm: "1-n" },
    E { tag: Single(REASON_FOR_STUDY), alias: "ReasonForStudy", vr: Exact(LO), vm: "1" },
    E { tag: Single(REQUESTING_PHYSICIAN_IDENTIFICATION_SEQUENCE), alias: "RequestingPhysicianIdentificationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REQUESTING_PHYSICIAN), alias: "RequestingPhysician", vr: Exact(PN), vm: "1" },
    E { tag: Single(REQUESTING_SERVICE), alias: "RequestingService", vr: Exact(LO), vm: "1" },
    E { tag: Single(REQUESTING_SERVICE_CODE_SEQUENCE), alias: "RequestingServiceCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(STUDY_ARRIVAL_DATE), alias: "StudyArrivalDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(STUDY_ARRIVAL_TIME), alias: "StudyArrivalTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(STUDY_COMPLETION_DATE), alias: "StudyCompletionDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(STUDY_COMPLETION_TIME), alias: "StudyCompletionTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(STUDY_COMPONENT_STATUS_ID), alias: "StudyComponentStatusID", vr: Exact(CS), vm: "1" },
    E { tag: Single(REQUESTED_PROCEDURE_DESCRIPTION), alias: "RequestedProcedureDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(REQUESTED_PROCEDURE_CODE_SEQUENCE), alias: "RequestedProcedureCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REASON_FOR_VISIT), alias: "ReasonForVisit", vr: Exact(UT), vm: "1" },
    E { tag: Single(REASON_FOR_VISIT_CODE_SEQUENCE), alias: "ReasonForVisitCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REQUESTED_CONTRAST_AGENT), alias: "RequestedContrastAgent", vr: Exact(LO), vm: "1" },
    E { tag: Single(STUDY_COMMENTS), alias: "StudyComments", vr: Exact(LT), vm: "1" },
    E { tag: Single(REFERENCED_PATIENT_ALIAS_SEQUENCE), alias: "ReferencedPatientAliasSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(VISIT_STATUS_ID), alias: "VisitStatusID", vr: Exact(CS), vm: "1" },
    E { tag: Single(ADMISSION_ID), alias: "AdmissionID", vr: Exact(LO), vm: "1" },
    E { tag: Single(ISSUER_OF_ADMISSION_ID), alias: "IssuerOfAdmissionID", vr: Exact(LO), vm: "1" },
    E { tag: Single(ISSUER_OF_ADMISSION_ID_SEQUENCE), alias: "IssuerOfAdmissionIDSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ROUTE_OF_ADMISSIONS), alias: "RouteOfAdmissions", vr: Exact(LO), vm: "1" },
    E { tag: Single(SCHEDULED_ADMISSION_DATE), alias: "ScheduledAdmissionDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(SCHEDULED_ADMISSION_TIME), alias: "ScheduledAdmissionTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(SCHEDULED_DISCHARGE_DATE), alias: "ScheduledDischargeDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(SCHEDULED_DISCHARGE_TIME), alias: "ScheduledDischargeTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(SCHEDULED_PATIENT_INSTITUTION_RESIDENCE), alias: "ScheduledPatientInstitutionResidence", vr: Exact(LO), vm: "1" },
    E { tag: Single(ADMITTING_DATE), alias: "AdmittingDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(ADMITTING_TIME), alias: "AdmittingTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(DISCHARGE_DATE), alias: "DischargeDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(DISCHARGE_TIME), alias: "DischargeTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(DISCHARGE_DIAGNOSIS_DESCRIPTION), alias: "DischargeDiagnosisDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(DISCHARGE_DIAGNOSIS_CODE_SEQUENCE), alias: "DischargeDiagnosisCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SPECIAL_NEEDS), alias: "SpecialNeeds", vr: Exact(LO), vm: "1" },
    E { tag: Single(SERVICE_EPISODE_ID), alias: "ServiceEpisodeID", vr: Exact(LO), vm: "1" },
    E { tag: Single(ISSUER_OF_SERVICE_EPISODE_ID), alias: "IssuerOfServiceEpisodeID", vr: Exact(LO), vm: "1" },
    E { tag: Single(SERVICE_EPISODE_DESCRIPTION), alias: "ServiceEpisodeDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(ISSUER_OF_SERVICE_EPISODE_ID_SEQUENCE), alias: "IssuerOfServiceEpisodeIDSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PERTINENT_DOCUMENTS_SEQUENCE), alias: "PertinentDocumentsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CURRENT_PATIENT_LOCATION), alias: "CurrentPatientLocation", vr: Exact(LO), vm: "1" },
    E { tag: Single(PATIENT_INSTITUTION_RESIDENCE), alias: "PatientInstitutionResidence", vr: Exact(LO), vm: "1" },
    E { tag: Single(PATIENT_STATE), alias: "PatientState", vr: Exact(LO), vm: "1" },
    E { tag: Single(PATIENT_CLINICAL_TRIAL_PARTICIPATION_SEQUENCE), alias: "PatientClinicalTrialParticipationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(VISIT_COMMENTS), alias: "VisitComments", vr: Exact(LT), vm: "1" },
    E { tag: Single(SCHEDULED_STATION_AE_TITLE), alias: "ScheduledStationAETitle", vr: Exact(AE), vm: "1-n" },
    E { tag: Single(SCHEDULED_PROCEDURE_STEP_START_DATE), alias: "ScheduledProcedureStepStartDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(SCHEDULED_PROCEDURE_STEP_START_TIME), alias: "ScheduledProcedureStepStartTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(SCHEDULED_PROCEDURE_STEP_END_DATE), alias: "ScheduledProcedureStepEndDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(SCHEDULED_PROCEDURE_STEP_END_TIME), alias: "ScheduledProcedureStepEndTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(SCHEDULED_PERFORMING_PHYSICIAN_NAME), alias: "ScheduledPerformingPhysicianName", vr: Exact(PN), vm: "1" },
    E { tag: Single(SCHEDULED_PROCEDURE_STEP_DESCRIPTION), alias: "ScheduledProcedureStepDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(SCHEDULED_PROTOCOL_CODE_SEQUENCE), alias: "ScheduledProtocolCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SCHEDULED_PROCEDURE_STEP_ID), alias: "ScheduledProcedureStepID", vr: Exact(SH), vm: "1" },
    E { tag: Single(STAGE_CODE_SEQUENCE), alias: "StageCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SCHEDULED_PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE), alias: "ScheduledPerformingPhysicianIdentificationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SCHEDULED_STATION_NAME), alias: "ScheduledStationName", vr: Exact(SH), vm: "1-n" },
    E { tag: Single(SCHEDULED_PROCEDURE_STEP_LOCATION), alias: "ScheduledProcedureStepLocation", vr: Exact(SH), vm: "1" },
    E { tag: Single(PRE_MEDICATION), alias: "PreMedication", vr: Exact(LO), vm: "1" },
    E { tag: Single(SCHEDULED_PROCEDURE_STEP_STATUS), alias: "ScheduledProcedureStepStatus", vr: Exact(CS), vm: "1" },
    E { tag: Single(ORDER_PLACER_IDENTIFIER_SEQUENCE), alias: "OrderPlacerIdentifierSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ORDER_FILLER_IDENTIFIER_SEQUENCE), alias: "OrderFillerIdentifierSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(LOCAL_NAMESPACE_ENTITY_ID), alias: "LocalNamespaceEntityID", vr: Exact(UT), vm: "1" },
    E { tag: Single(UNIVERSAL_ENTITY_ID), alias: "UniversalEntityID", vr: Exact(UT), vm: "1" },
    E { tag: Single(UNIVERSAL_ENTITY_ID_TYPE), alias: "UniversalEntityIDType", vr: Exact(CS), vm: "1" },
    E { tag: Single(IDENTIFIER_TYPE_CODE), alias: "IdentifierTypeCode", vr: Exact(CS), vm: "1" },
    E { tag: Single(ASSIGNING_FACILITY_SEQUENCE), alias: "AssigningFacilitySequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ASSIGNING_JURISDICTION_CODE_SEQUENCE), alias: "AssigningJurisdictionCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ASSIGNING_AGENCY_OR_DEPARTMENT_CODE_SEQUENCE), alias: "AssigningAgencyOrDepartmentCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SCHEDULED_PROCEDURE_STEP_SEQUENCE), alias: "ScheduledProcedureStepSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_NON_IMAGE_COMPOSITE_SOP_INSTANCE_SEQUENCE), alias: "ReferencedNonImageCompositeSOPInstanceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PERFORMED_STATION_AE_TITLE), alias: "PerformedStationAETitle", vr: Exact(AE), vm: "1" },
    E { tag: Single(PERFORMED_STATION_NAME), alias: "PerformedStationName", vr: Exact(SH), vm: "1" },
    E { tag: Single(PERFORMED_LOCATION), alias: "PerformedLocation", vr: Exact(SH), vm: "1" },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_START_DATE), alias: "PerformedProcedureStepStartDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_START_TIME), alias: "PerformedProcedureStepStartTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_END_DATE), alias: "PerformedProcedureStepEndDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_END_TIME), alias: "PerformedProcedureStepEndTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_STATUS), alias: "PerformedProcedureStepStatus", vr: Exact(CS), vm: "1" },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_ID), alias: "PerformedProcedureStepID", vr: Exact(SH), vm: "1" },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_DESCRIPTION), alias: "PerformedProcedureStepDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(PERFORMED_PROCEDURE_TYPE_DESCRIPTION), alias: "PerformedProcedureTypeDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(PERFORMED_PROTOCOL_CODE_SEQUENCE), alias: "PerformedProtocolCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PERFORMED_PROTOCOL_TYPE), alias: "PerformedProtocolType", vr: Exact(CS), vm: "1" },
    E { tag: Single(SCHEDULED_STEP_ATTRIBUTES_SEQUENCE), alias: "ScheduledStepAttributesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REQUEST_ATTRIBUTES_SEQUENCE), alias: "RequestAttributesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP), alias: "CommentsOnThePerformedProcedureStep", vr: Exact(ST), vm: "1" },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_DISCONTINUATION_REASON_CODE_SEQUENCE), alias: "PerformedProcedureStepDiscontinuationReasonCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(QUANTITY_SEQUENCE), alias: "QuantitySequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(QUANTITY), alias: "Quantity", vr: Exact(DS), vm: "1" },
    E { tag: Single(MEASURING_UNITS_SEQUENCE), alias: "MeasuringUnitsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(BILLING_ITEM_SEQUENCE), alias: "BillingItemSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TOTAL_TIME_OF_FLUOROSCOPY), alias: "TotalTimeOfFluoroscopy", vr: Exact(US), vm: "1" },
    E { tag: Single(TOTAL_NUMBER_OF_EXPOSURES), alias: "TotalNumberOfExposures", vr: Exact(US), vm: "1" },
    E { tag: Single(ENTRANCE_DOSE), alias: "EntranceDose", vr: Exact(US), vm: "1" },
    E { tag: Single(EXPOSED_AREA), alias: "ExposedArea", vr: Exact(US), vm: "1-2" },
    E { tag: Single(DISTANCE_SOURCE_TO_ENTRANCE), alias: "DistanceSourceToEntrance", vr: Exact(DS), vm: "1" },
    E { tag: Single(DISTANCE_SOURCE_TO_SUPPORT), alias: "DistanceSourceToSupport", vr: Exact(DS), vm: "1" },
    E { tag: Single(EXPOSURE_DOSE_SEQUENCE), alias: "ExposureDoseSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(COMMENTS_ON_RADIATION_DOSE), alias: "CommentsOnRadiationDose", vr: Exact(ST), vm: "1" },
    E { tag: Single(X_RAY_OUTPUT), alias: "XRayOutput", vr: Exact(DS), vm: "1" },
    E { tag: Single(HALF_VALUE_LAYER), alias: "HalfValueLayer", vr: Exact(DS), vm: "1" },
    E { tag: Single(ORGAN_DOSE), alias: "OrganDose", vr: Exact(DS), vm: "1" },
    E { tag: Single(ORGAN_EXPOSED), alias: "OrganExposed", vr: Exact(CS), vm: "1" },
    E { tag: Single(BILLING_PROCEDURE_STEP_SEQUENCE), alias: "BillingProcedureStepSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(FILM_CONSUMPTION_SEQUENCE), alias: "FilmConsumptionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(BILLING_SUPPLIES_AND_DEVICES_SEQUENCE), alias: "BillingSuppliesAndDevicesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_PROCEDURE_STEP_SEQUENCE), alias: "ReferencedProcedureStepSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PERFORMED_SERIES_SEQUENCE), alias: "PerformedSeriesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(COMMENTS_ON_THE_SCHEDULED_PROCEDURE_STEP), alias: "CommentsOnTheScheduledProcedureStep", vr: Exact(LT), vm: "1" },
    E { tag: Single(PROTOCOL_CONTEXT_SEQUENCE), alias: "ProtocolContextSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONTENT_ITEM_MODIFIER_SEQUENCE), alias: "ContentItemModifierSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SCHEDULED_SPECIMEN_SEQUENCE), alias: "ScheduledSpecimenSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SPECIMEN_ACCESSION_NUMBER), alias: "SpecimenAccessionNumber", vr: Exact(LO), vm: "1" },
    E { tag: Single(CONTAINER_IDENTIFIER), alias: "ContainerIdentifier", vr: Exact(LO), vm: "1" },
    E { tag: Single(ISSUER_OF_THE_CONTAINER_IDENTIFIER_SEQUENCE), alias: "IssuerOfTheContainerIdentifierSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ALTERNATE_CONTAINER_IDENTIFIER_SEQUENCE), alias: "AlternateContainerIdentifierSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONTAINER_TYPE_CODE_SEQUENCE), alias: "ContainerTypeCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONTAINER_DESCRIPTION), alias: "ContainerDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(CONTAINER_COMPONENT_SEQUENCE), alias: "ContainerComponentSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SPECIMEN_SEQUENCE), alias: "SpecimenSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SPECIMEN_IDENTIFIER), alias: "SpecimenIdentifier", vr: Exact(LO), vm: "1" },
    E { tag: Single(SPECIMEN_DESCRIPTION_SEQUENCE_TRIAL), alias: "SpecimenDescriptionSequenceTrial", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SPECIMEN_DESCRIPTION_TRIAL), alias: "SpecimenDescriptionTrial", vr: Exact(ST), vm: "1" },
    E { tag: Single(SPECIMEN_UID), alias: "SpecimenUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(ACQUISITION_CONTEXT_SEQUENCE), alias: "AcquisitionContextSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ACQUISITION_CONTEXT_DESCRIPTION), alias: "AcquisitionContextDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(SPECIMEN_DESCRIPTION_SEQUENCE), alias: "SpecimenDescriptionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ISSUER_OF_THE_SPECIMEN_IDENTIFIER_SEQUENCE), alias: "IssuerOfTheSpecimenIdentifierSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SPECIMEN_TYPE_CODE_SEQUENCE), alias: "SpecimenTypeCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SPECIMEN_SHORT_DESCRIPTION), alias: "SpecimenShortDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(SPECIMEN_DETAILED_DESCRIPTION), alias: "SpecimenDetailedDescription", vr: Exact(UT), vm: "1" },
    E { tag: Single(SPECIMEN_PREPARATION_SEQUENCE), alias: "SpecimenPreparationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SPECIMEN_PREPARATION_STEP_CONTENT_ITEM_SEQUENCE), alias: "SpecimenPreparationStepContentItemSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SPECIMEN_LOCALIZATION_CONTENT_ITEM_SEQUENCE), alias: "SpecimenLocalizationContentItemSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SLIDE_IDENTIFIER), alias: "SlideIdentifier", vr: Exact(LO), vm: "1" },
    E { tag: Single(WHOLE_SLIDE_MICROSCOPY_IMAGE_FRAME_TYPE_SEQUENCE), alias: "WholeSlideMicroscopyImageFrameTypeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(IMAGE_CENTER_POINT_COORDINATES_SEQUENCE), alias: "ImageCenterPointCoordinatesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(X_OFFSET_IN_SLIDE_COORDINATE_SYSTEM), alias: "XOffsetInSlideCoordinateSystem", vr: Exact(DS), vm: "1" },
    E { tag: Single(Y_OFFSET_IN_SLIDE_COORDINATE_SYSTEM), alias: "YOffsetInSlideCoordinateSystem", vr: Exact(DS), vm: "1" },
    E { tag: Single(Z_OFFSET_IN_SLIDE_COORDINATE_SYSTEM), alias: "ZOffsetInSlideCoordinateSystem", vr: Exact(DS), vm: "1" },
    E { tag: Single(PIXEL_SPACING_SEQUENCE), alias: "PixelSpacingSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(COORDINATE_SYSTEM_AXIS_CODE_SEQUENCE), alias: "CoordinateSystemAxisCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MEASUREMENT_UNITS_CODE_SEQUENCE), alias: "MeasurementUnitsCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REQUESTED_PROCEDURE_ID), alias: "RequestedProcedureID", vr: Exact(SH), vm: "1" },
    E { tag: Single(REASON_FOR_THE_REQUESTED_PROCEDURE), alias: "ReasonForTheRequestedProcedure", vr: Exact(LO), vm: "1" },
    E { tag: Single(REQUESTED_PROCEDURE_PRIORITY), alias: "RequestedProcedurePriority", vr: Exact(SH), vm: "1" },
    E { tag: Single(PATIENT_TRANSPORT_ARRANGEMENTS), alias: "PatientTransportArrangements", vr: Exact(LO), vm: "1" },
    E { tag: Single(REQUESTED_PROCEDURE_LOCATION), alias: "RequestedProcedureLocation", vr: Exact(LO), vm: "1" },
    E { tag: Single(PLACER_ORDER_NUMBER_PROCEDURE), alias: "PlacerOrderNumberProcedure", vr: Exact(SH), vm: "1" },
    E { tag: Single(FILLER_ORDER_NUMBER_PROCEDURE), alias: "FillerOrderNumberProcedure", vr: Exact(SH), vm: "1" },
    E { tag: Single(CONFIDENTIALITY_CODE), alias: "ConfidentialityCode", vr: Exact(LO), vm: "1" },
    E { tag: Single(REPORTING_PRIORITY), alias: "ReportingPriority", vr: Exact(SH), vm: "1" },
    E { tag: Single(REASON_FOR_REQUESTED_PROCEDURE_CODE_SEQUENCE), alias: "ReasonForRequestedProcedureCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(NAMES_OF_INTENDED_RECIPIENTS_OF_RESULTS), alias: "NamesOfIntendedRecipientsOfResults", vr: Exact(PN), vm: "1-n" },
    E { tag: Single(INTENDED_RECIPIENTS_OF_RESULTS_IDENTIFICATION_SEQUENCE), alias: "IntendedRecipientsOfResultsIdentificationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REASON_FOR_PERFORMED_PROCEDURE_CODE_SEQUENCE), alias: "ReasonForPerformedProcedureCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REQUESTED_PROCEDURE_DESCRIPTION_TRIAL), alias: "RequestedProcedureDescriptionTrial", vr: Exact(LO), vm: "1" },
    E { tag: Single(PERSON_IDENTIFICATION_CODE_SEQUENCE), alias: "PersonIdentificationCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PERSON_ADDRESS), alias: "PersonAddress", vr: Exact(ST), vm: "1" },
    E { tag: Single(PERSON_TELEPHONE_NUMBERS), alias: "PersonTelephoneNumbers", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(PERSON_TELECOM_INFORMATION), alias: "PersonTelecomInformation", vr: Exact(LT), vm: "1" },
    E { tag: Single(REQUESTED_PROCEDURE_COMMENTS), alias: "RequestedProcedureComments", vr: Exact(LT), vm: "1" },
    E { tag: Single(REASON_FOR_THE_IMAGING_SERVICE_REQUEST), alias: "ReasonForTheImagingServiceRequest", vr: Exact(LO), vm: "1" },
    E { tag: Single(ISSUE_DATE_OF_IMAGING_SERVICE_REQUEST), alias: "IssueDateOfImagingServiceRequest", vr: Exact(DA), vm: "1" },
    E { tag: Single(ISSUE_TIME_OF_IMAGING_SERVICE_REQUEST), alias: "IssueTimeOfImagingServiceRequest", vr: Exact(TM), vm: "1" },
    E { tag: Single(PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST_RETIRED), alias: "PlacerOrderNumberImagingServiceRequestRetired", vr: Exact(SH), vm: "1" },
    E { tag: Single(FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST_RETIRED), alias: "FillerOrderNumberImagingServiceRequestRetired", vr: Exact(SH), vm: "1" },
    E { tag: Single(ORDER_ENTERED_BY), alias: "OrderEnteredBy", vr: Exact(PN), vm: "1" },
    E { tag: Single(ORDER_ENTERER_LOCATION), alias: "OrderEntererLocation", vr: Exact(SH), vm: "1" },
    E { tag: Single(ORDER_CALLBACK_PHONE_NUMBER), alias: "OrderCallbackPhoneNumber", vr: Exact(SH), vm: "1" },
    E { tag: Single(ORDER_CALLBACK_TELECOM_INFORMATION), alias: "OrderCallbackTelecomInformation", vr: Exact(LT), vm: "1" },
    E { tag: Single(PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST), alias: "PlacerOrderNumberImagingServiceRequest", vr: Exact(LO), vm: "1" },
    E { tag: Single(FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST), alias: "FillerOrderNumberImagingServiceRequest", vr: Exact(LO), vm: "1" },
    E { tag: Single(IMAGING_SERVICE_REQUEST_COMMENTS), alias: "ImagingServiceRequestComments", vr: Exact(LT), vm: "1" },
    E { tag: Single(CONFIDENTIALITY_CONSTRAINT_ON_PATIENT_DATA_DESCRIPTION), alias: "ConfidentialityConstraintOnPatientDataDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(ENTRANCE_DOSE_INM_GY), alias: "EntranceDoseInmGy", vr: Exact(DS), vm: "1" },
    E { tag: Single(ENTRANCE_DOSE_DERIVATION), alias: "EntranceDoseDerivation", vr: Exact(CS), vm: "1" },
    E { tag: Single(PARAMETRIC_MAP_FRAME_TYPE_SEQUENCE), alias: "ParametricMapFrameTypeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_IMAGE_REAL_WORLD_VALUE_MAPPING_SEQUENCE), alias: "ReferencedImageRealWorldValueMappingSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REAL_WORLD_VALUE_MAPPING_SEQUENCE), alias: "RealWorldValueMappingSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PIXEL_VALUE_MAPPING_CODE_SEQUENCE), alias: "PixelValueMappingCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(LUT_LABEL), alias: "LUTLabel", vr: Exact(SH), vm: "1" },
    E { tag: Single(REAL_WORLD_VALUE_LAST_VALUE_MAPPED), alias: "RealWorldValueLastValueMapped", vr: Xs, vm: "1" }, // US or SS
    E { tag: Single(REAL_WORLD_VALUE_LUT_DATA), alias: "RealWorldValueLUTData", vr: Exact(FD), vm: "1-n" },
    E { tag: Single(DOUBLE_FLOAT_REAL_WORLD_VALUE_LAST_VALUE_MAPPED), alias: "DoubleFloatRealWorldValueLastValueMapped", vr: Exact(FD), vm: "1" },
    E { tag: Single(DOUBLE_FLOAT_REAL_WORLD_VALUE_FIRST_VALUE_MAPPED), alias: "DoubleFloatRealWorldValueFirstValueMapped", vr: Exact(FD), vm: "1" },
    E { tag: Single(REAL_WORLD_VALUE_FIRST_VALUE_MAPPED), alias: "RealWorldValueFirstValueMapped", vr: Xs, vm: "1" }, // US or SS
    E { tag: Single(QUANTITY_DEFINITION_SEQUENCE), alias: "QuantityDefinitionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REAL_WORLD_VALUE_INTERCEPT), alias: "RealWorldValueIntercept", vr: Exact(FD), vm: "1" },
    E { tag: Single(REAL_WORLD_VALUE_SLOPE), alias: "RealWorldValueSlope", vr: Exact(FD), vm: "1" },
    E { tag: Single(FINDINGS_FLAG_TRIAL), alias: "FindingsFlagTrial", vr: Exact(CS), vm: "1" },
    E { tag: Single(RELATIONSHIP_TYPE), alias: "RelationshipType", vr: Exact(CS), vm: "1" },
    E { tag: Single(VERIFYING_ORGANIZATION), alias: "VerifyingOrganization", vr: Exact(LO), vm: "1" },
    E { tag: Single(VERIFICATION_DATE_TIME), alias: "VerificationDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(OBSERVATION_DATE_TIME), alias: "ObservationDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(OBSERVATION_START_DATE_TIME), alias: "ObservationStartDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(VALUE_TYPE), alias: "ValueType", vr: Exact(CS), vm: "1" },
    E { tag: Single(CONCEPT_NAME_CODE_SEQUENCE), alias: "ConceptNameCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONTINUITY_OF_CONTENT), alias: "ContinuityOfContent", vr: Exact(CS), vm: "1" },
    E { tag: Single(VERIFYING_OBSERVER_SEQUENCE), alias: "VerifyingObserverSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(VERIFYING_OBSERVER_NAME), alias: "VerifyingObserverName", vr: Exact(PN), vm: "1" },
    E { tag: Single(AUTHOR_OBSERVER_SEQUENCE), alias: "AuthorObserverSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PARTICIPANT_SEQUENCE), alias: "ParticipantSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CUSTODIAL_ORGANIZATION_SEQUENCE), alias: "CustodialOrganizationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PARTICIPATION_TYPE), alias: "ParticipationType", vr: Exact(CS), vm: "1" },
    E { tag: Single(PARTICIPATION_DATE_TIME), alias: "ParticipationDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(OBSERVER_TYPE), alias: "ObserverType", vr: Exact(CS), vm: "1" },
    E { tag: Single(VERIFYING_OBSERVER_IDENTIFICATION_CODE_SEQUENCE), alias: "VerifyingObserverIdentificationCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_WAVEFORM_CHANNELS), alias: "ReferencedWaveformChannels", vr: Exact(US), vm: "2-2n" },
    E { tag: Single(DATE_TIME), alias: "DateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(DATE), alias: "Date", vr: Exact(DA), vm: "1" },
    E { tag: Single(TIME), alias: "Time", vr: Exact(TM), vm: "1" },
    E { tag: Single(PERSON_NAME), alias: "PersonName", vr: Exact(PN), vm: "1" },
    E { tag: Single(UID), alias: "UID", vr: Exact(UI), vm: "1" },
    E { tag: Single(TEMPORAL_RANGE_TYPE), alias: "TemporalRangeType", vr: Exact(CS), vm: "1" },
    E { tag: Single(REFERENCED_SAMPLE_POSITIONS), alias: "ReferencedSamplePositions", vr: Exact(UL), vm: "1-n" },
    E { tag: Single(REFERENCED_FRAME_NUMBERS), alias: "ReferencedFrameNumbers", vr: Exact(US), vm: "1-n" },
    E { tag: Single(REFERENCED_TIME_OFFSETS), alias: "ReferencedTimeOffsets", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(REFERENCED_DATE_TIME), alias: "ReferencedDateTime", vr: Exact(DT), vm: "1-n" },
    E { tag: Single(TEXT_VALUE), alias: "TextValue", vr: Exact(UT), vm: "1" },
    E { tag: Single(FLOATING_POINT_VALUE), alias: "FloatingPointValue", vr: Exact(FD), vm: "1-n" },
    E { tag: Single(RATIONAL_NUMERATOR_VALUE), alias: "RationalNumeratorValue", vr: Exact(SL), vm: "1-n" },
    E { tag: Single(RATIONAL_DENOMINATOR_VALUE), alias: "RationalDenominatorValue", vr: Exact(UL), vm: "1-n" },
    E { tag: Single(CONCEPT_CODE_SEQUENCE), alias: "ConceptCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PURPOSE_OF_REFERENCE_CODE_SEQUENCE), alias: "PurposeOfReferenceCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ANNOTATION_GROUP_NUMBER), alias: "AnnotationGroupNumber", vr: Exact(US), vm: "1" },
    E { tag: Single(MODIFIER_CODE_SEQUENCE), alias: "ModifierCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MEASURED_VALUE_SEQUENCE), alias: "MeasuredValueSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(NUMERIC_VALUE_QUALIFIER_CODE_SEQUENCE), alias: "NumericValueQualifierCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(NUMERIC_VALUE), alias: "NumericValue", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(PREDECESSOR_DOCUMENTS_SEQUENCE), alias: "PredecessorDocumentsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_REQUEST_SEQUENCE), alias: "ReferencedRequestSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PERFORMED_PROCEDURE_CODE_SEQUENCE), alias: "PerformedProcedureCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CURRENT_REQUESTED_PROCEDURE_EVIDENCE_SEQUENCE), alias: "CurrentRequestedProcedureEvidenceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PERTINENT_OTHER_EVIDENCE_SEQUENCE), alias: "PertinentOtherEvidenceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(HL7_STRUCTURED_DOCUMENT_REFERENCE_SEQUENCE), alias: "HL7StructuredDocumentReferenceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(COMPLETION_FLAG), alias: "CompletionFlag", vr: Exact(CS), vm: "1" },
    E { tag: Single(COMPLETION_FLAG_DESCRIPTION), alias: "CompletionFlagDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(VERIFICATION_FLAG), alias: "VerificationFlag", vr: Exact(CS), vm: "1" },
    E { tag: Single(ARCHIVE_REQUESTED), alias: "ArchiveRequested", vr: Exact(CS), vm: "1" },
    E { tag: Single(PRELIMINARY_FLAG), alias: "PreliminaryFlag", vr: Exact(CS), vm: "1" },
    E { tag: Single(CONTENT_TEMPLATE_SEQUENCE), alias: "ContentTemplateSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(IDENTICAL_DOCUMENTS_SEQUENCE), alias: "IdenticalDocumentsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONTENT_SEQUENCE), alias: "ContentSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(WAVEFORM_ANNOTATION_SEQUENCE), alias: "WaveformAnnotationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TEMPLATE_IDENTIFIER), alias: "TemplateIdentifier", vr: Exact(CS), vm: "1" },
    E { tag: Single(REFERENCED_CONTENT_ITEM_IDENTIFIER), alias: "ReferencedContentItemIdentifier", vr: Exact(UL), vm: "1-n" },
    E { tag: Single(HL7_INSTANCE_IDENTIFIER), alias: "HL7InstanceIdentifier", vr: Exact(ST), vm: "1" },
    E { tag: Single(HL7_DOCUMENT_EFFECTIVE_TIME), alias: "HL7DocumentEffectiveTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(HL7_DOCUMENT_TYPE_CODE_SEQUENCE), alias: "HL7DocumentTypeCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DOCUMENT_CLASS_CODE_SEQUENCE), alias: "DocumentClassCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RETRIEVE_URI), alias: "RetrieveURI", vr: Exact(UR), vm: "1" },
    E { tag: Single(RETRIEVE_LOCATION_UID), alias: "RetrieveLocationUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(TYPE_OF_INSTANCES), alias: "TypeOfInstances", vr: Exact(CS), vm: "1" },
    E { tag: Single(DICOM_RETRIEVAL_SEQUENCE), alias: "DICOMRetrievalSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DICOM_MEDIA_RETRIEVAL_SEQUENCE), alias: "DICOMMediaRetrievalSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(WADO_RETRIEVAL_SEQUENCE), alias: "WADORetrievalSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(XDS_RETRIEVAL_SEQUENCE), alias: "XDSRetrievalSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(WADORS_RETRIEVAL_SEQUENCE), alias: "WADORSRetrievalSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REPOSITORY_UNIQUE_ID), alias: "RepositoryUniqueID", vr: Exact(UI), vm: "1" },
    E { tag: Single(HOME_COMMUNITY_ID), alias: "HomeCommunityID", vr: Exact(UI), vm: "1" },
    E { tag: Single(ENERGY_WINDOW_VECTOR), alias: "EnergyWindowVector", vr: Exact(US), vm: "1-n" },
    E { tag: Single(NUMBER_OF_ENERGY_WINDOWS), alias: "NumberOfEnergyWindows", vr: Exact(US), vm: "1" },
    E { tag: Single(ENERGY_WINDOW_INFORMATION_SEQUENCE), alias: "EnergyWindowInformationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ENERGY_WINDOW_RANGE_SEQUENCE), alias: "EnergyWindowRangeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ENERGY_WINDOW_LOWER_LIMIT), alias: "EnergyWindowLowerLimit", vr: Exact(DS), vm: "1" },
    E { tag: Single(ENERGY_WINDOW_UPPER_LIMIT), alias: "EnergyWindowUpperLimit", vr: Exact(DS), vm: "1" },
    E { tag: Single(RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE), alias: "RadiopharmaceuticalInformationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RESIDUAL_SYRINGE_COUNTS), alias: "ResidualSyringeCounts", vr: Exact(IS), vm: "1" },
    E { tag: Single(ENERGY_WINDOW_NAME), alias: "EnergyWindowName", vr: Exact(SH), vm: "1" },
    E { tag: Single(DETECTOR_VECTOR), alias: "DetectorVector", vr: Exact(US), vm: "1-n" },
    E { tag: Single(NUMBER_OF_DETECTORS), alias: "NumberOfDetectors", vr: Exact(US), vm: "1" },
    E { tag: Single(DETECTOR_INFORMATION_SEQUENCE), alias: "DetectorInformationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PHASE_VECTOR), alias: "PhaseVector", vr: Exact(US), vm: "1-n" },
    E { tag: Single(NUMBER_OF_PHASES), alias: "NumberOfPhases", vr: Exact(US), vm: "1" },
    E { tag: Single(PHASE_INFORMATION_SEQUENCE), alias: "PhaseInformationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(NUMBER_OF_FRAMES_IN_PHASE), alias: "NumberOfFramesInPhase", vr: Exact(US), vm: "1" },
    E { tag: Single(PHASE_DELAY), alias: "PhaseDelay", vr: Exact(IS), vm: "1" },
    E { tag: Single(PAUSE_BETWEEN_FRAMES), alias: "PauseBetweenFrames", vr: Exact(IS), vm: "1" },
    E { tag: Single(PHASE_DESCRIPTION), alias: "PhaseDescription", vr: Exact(CS), vm: "1" },
    E { tag: Single(ROTATION_VECTOR), alias: "RotationVector", vr: Exact(US), vm: "1-n" },
    E { tag: Single(NUMBER_OF_ROTATIONS), alias: "NumberOfRotations", vr: Exact(US), vm: "1" },
    E { tag: Single(ROTATION_INFORMATION_SEQUENCE), alias: "RotationInformationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(NUMBER_OF_FRAMES_IN_ROTATION), alias: "NumberOfFramesInRotation", vr: Exact(US), vm: "1" },
    E { tag: Single(RR_INTERVAL_VECTOR), alias: "RRIntervalVector", vr: Exact(US), vm: "1-n" },
    E { tag: Single(NUMBER_OF_RR_INTERVALS), alias: "NumberOfRRIntervals", vr: Exact(US), vm: "1" },
    E { tag: Single(GATED_INFORMATION_SEQUENCE), alias: "GatedInformationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DATA_INFORMATION_SEQUENCE), alias: "DataInformationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TIME_SLOT_VECTOR), alias: "TimeSlotVector", vr: Exact(US), vm: "1-n" },
    E { tag: Single(NUMBER_OF_TIME_SLOTS), alias: "NumberOfTimeSlots", vr: Exact(US), vm: "1" },
    E { tag: Single(TIME_SLOT_INFORMATION_SEQUENCE), alias: "TimeSlotInformationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TIME_SLOT_TIME), alias: "TimeSlotTime", vr: Exact(DS), vm: "1" },
    E { tag: Single(SLICE_VECTOR), alias: "SliceVector", vr: Exact(US), vm: "1-n" },
    E { tag: Single(NUMBER_OF_SLICES), alias: "NumberOfSlices", vr: Exact(US), vm: "1" },
    E { tag: Single(ANGULAR_VIEW_VECTOR), alias: "AngularViewVector", vr: Exact(US), vm: "1-n" },
    E { tag: Single(TIME_SLICE_VECTOR), alias: "TimeSliceVector", vr: Exact(US), vm: "1-n" },
    E { tag: Single(NUMBER_OF_TIME_SLICES), alias: "NumberOfTimeSlices", vr: Exact(US), vm: "1" },
    E { tag: Single(START_ANGLE), alias: "StartAngle", vr: Exact(DS), vm: "1" },
    E { tag: Single(TYPE_OF_DETECTOR_MOTION), alias: "TypeOfDetectorMotion", vr: Exact(CS), vm: "1" },
    E { tag: Single(TRIGGER_VECTOR), alias: "TriggerVector", vr: Exact(IS), vm: "1-n" },
    E { tag: Single(NUMBER_OF_TRIGGERS_IN_PHASE), alias: "NumberOfTriggersInPhase", vr: Exact(US), vm: "1" },
    E { tag: Single(VIEW_CODE_SEQUENCE), alias: "ViewCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(VIEW_MODIFIER_CODE_SEQUENCE), alias: "ViewModifierCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RADIONUCLIDE_CODE_SEQUENCE), alias: "RadionuclideCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ADMINISTRATION_ROUTE_CODE_SEQUENCE), alias: "AdministrationRouteCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RADIOPHARMACEUTICAL_CODE_SEQUENCE), alias: "RadiopharmaceuticalCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CALIBRATION_DATA_SEQUENCE), alias: "CalibrationDataSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ENERGY_WINDOW_NUMBER), alias: "EnergyWindowNumber", vr: Exact(US), vm: "1" },
    E { tag: Single(IMAGE_ID), alias: "ImageID", vr: Exact(SH), vm: "1" },
    E { tag: Single(PATIENT_ORIENTATION_CODE_SEQUENCE), alias: "PatientOrientationCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PATIENT_ORIENTATION_MODIFIER_CODE_SEQUENCE), alias: "PatientOrientationModifierCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PATIENT_GANTRY_RELATIONSHIP_CODE_SEQUENCE), alias: "PatientGantryRelationshipCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SLICE_PROGRESSION_DIRECTION), alias: "SliceProgressionDirection", vr: Exact(CS), vm: "1" },
    E { tag: Single(SCAN_PROGRESSION_DIRECTION), alias: "ScanProgressionDirection", vr: Exact(CS), vm: "1" },
    E { tag: Single(SERIES_TYPE), alias: "SeriesType", vr: Exact(CS), vm: "2" },
    E { tag: Single(UNITS), alias: "Units", vr: Exact(CS), vm: "1" },
    E { tag: Single(COUNTS_SOURCE), alias: "CountsSource", vr: Exact(CS), vm: "1" },
    E { tag: Single(REPROJECTION_METHOD), alias: "ReprojectionMethod", vr: Exact(CS), vm: "1" },
    E { tag: Single(SUV_TYPE), alias: "SUVType", vr: Exact(CS), vm: "1" },
    E { tag: Single(RANDOMS_CORRECTION_METHOD), alias: "RandomsCorrectionMethod", vr: Exact(CS), vm: "1" },
    E { tag: Single(ATTENUATION_CORRECTION_METHOD), alias: "AttenuationCorrectionMethod", vr: Exact(LO), vm: "1" },
    E { tag: Single(DECAY_CORRECTION), alias: "DecayCorrection", vr: Exact(CS), vm: "1" },
    E { tag: Single(RECONSTRUCTION_METHOD), alias: "ReconstructionMethod", vr: Exact(LO), vm: "1" },
    E { tag: Single(DETECTOR_LINES_OF_RESPONSE_USED), alias: "DetectorLinesOfResponseUsed", vr: Exact(LO), vm: "1" },
    E { tag: Single(SCATTER_CORRECTION_METHOD), alias: "ScatterCorrectionMethod", vr: Exact(LO), vm: "1" },
    E { tag: Single(AXIAL_ACCEPTANCE), alias: "AxialAcceptance", vr: Exact(DS), vm: "1" },
    E { tag: Single(AXIAL_MASH), alias: "AxialMash", vr: Exact(IS), vm: "2" },
    E { tag: Single(TRANSVERSE_MASH), alias: "TransverseMash", vr: Exact(IS), vm: "1" },
    E { tag: Single(DETECTOR_ELEMENT_SIZE), alias: "DetectorElementSize", vr: Exact(DS), vm: "2" },
    E { tag: Single(COINCIDENCE_WINDOW_WIDTH), alias: "CoincidenceWindowWidth", vr: Exact(DS), vm: "1" },
    E { tag: Single(SECONDARY_COUNTS_TYPE), alias: "SecondaryCountsType", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(FRAME_REFERENCE_TIME), alias: "FrameReferenceTime", vr: Exact(DS), vm: "1" },
    E { tag: Single(PRIMARY_PROMPTS_COUNTS_ACCUMULATED), alias: "PrimaryPromptsCountsAccumulated", vr: Exact(IS), vm: "1" },
    E { tag: Single(SECONDARY_COUNTS_ACCUMULATED), alias: "SecondaryCountsAccumulated", vr: Exact(IS), vm: "1-n" },
    E { tag: Single(SLICE_SENSITIVITY_FACTOR), alias: "SliceSensitivityFactor", vr: Exact(DS), vm: "1" },
    E { tag: Single(DECAY_FACTOR), alias: "DecayFactor", vr: Exact(DS), vm: "1" },
    E { tag: Single(DOSE_CALIBRATION_FACTOR), alias: "DoseCalibrationFactor", vr: Exact(DS), vm: "1" },
    E { tag: Single(SCATTER_FRACTION_FACTOR), alias: "ScatterFractionFactor", vr: Exact(DS), vm: "1" },
    E { tag: Single(DEAD_TIME_FACTOR), alias: "DeadTimeFactor", vr: Exact(DS), vm: "1" },
    E { tag: Single(IMAGE_INDEX), alias: "ImageIndex", vr: Exact(US), vm: "1" },
    E { tag: Single(COUNTS_INCLUDED), alias: "CountsIncluded", vr: Exact(CS), vm: "1-n" },
    E { tag: Single(DEAD_TIME_CORRECTION_FLAG), alias: "DeadTimeCorrectionFlag", vr: Exact(CS), vm: "1" },
    E { tag: Single(HISTOGRAM_SEQUENCE), alias: "HistogramSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(HISTOGRAM_NUMBER_OF_BINS), alias: "HistogramNumberOfBins", vr: Exact(US), vm: "1" },
    E { tag: Single(HISTOGRAM_FIRST_BIN_VALUE), alias: "HistogramFirstBinValue", vr: Xs, vm: "1" }, // US or SS
    E { tag: Single(HISTOGRAM_LAST_BIN_VALUE), alias: "HistogramLastBinValue", vr: Xs, vm: "1" }, // US or SS
    E { tag: Single(HISTOGRAM_BIN_WIDTH), alias: "HistogramBinWidth", vr: Exact(US), vm: "1" },
    E { tag: Single(HISTOGRAM_EXPLANATION), alias: "HistogramExplanation", vr: Exact(LO), vm: "1" },
    E { tag: Single(HISTOGRAM_DATA), alias: "HistogramData", vr: Exact(UL), vm: "1-n" },
    E { tag: Single(SEGMENTATION_TYPE), alias: "SegmentationType", vr: Exact(CS), vm: "1" },
    E { tag: Single(SEGMENT_SEQUENCE), alias: "SegmentSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SEGMENTED_PROPERTY_CATEGORY_CODE_SEQUENCE), alias: "SegmentedPropertyCategoryCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SEGMENT_NUMBER), alias: "SegmentNumber", vr: Exact(US), vm: "1" },
    E { tag: Single(SEGMENT_LABEL), alias: "SegmentLabel", vr: Exact(LO), vm: "1" },
    E { tag: Single(SEGMENT_DESCRIPTION), alias: "SegmentDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(SEGMENT_ALGORITHM_TYPE), alias: "SegmentAlgorithmType", vr: Exact(CS), vm: "1" },
    E { tag: Single(SEGMENT_ALGORITHM_NAME), alias: "SegmentAlgorithmName", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(SEGMENT_IDENTIFICATION_SEQUENCE), alias: "SegmentIdentificationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_SEGMENT_NUMBER), alias: "ReferencedSegmentNumber", vr: Exact(US), vm: "1-n" },
    E { tag: Single(RECOMMENDED_DISPLAY_GRAYSCALE_VALUE), alias: "RecommendedDisplayGrayscaleValue", vr: Exact(US), vm: "1" },
    E { tag: Single(RECOMMENDED_DISPLAY_CIE_LAB_VALUE), alias: "RecommendedDisplayCIELabValue", vr: Exact(US), vm: "3" },
    E { tag: Single(MAXIMUM_FRACTIONAL_VALUE), alias: "MaximumFractionalValue", vr: Exact(US), vm: "1" },
    E { tag: Single(SEGMENTED_PROPERTY_TYPE_CODE_SEQUENCE), alias: "SegmentedPropertyTypeCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SEGMENTATION_FRACTIONAL_TYPE), alias: "SegmentationFractionalType", vr: Exact(CS), vm: "1" },
    E { tag: Single(SEGMENTED_PROPERTY_TYPE_MODIFIER_CODE_SEQUENCE), alias: "SegmentedPropertyTypeModifierCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(USED_SEGMENTS_SEQUENCE), alias: "UsedSegmentsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SEGMENTS_OVERLAP), alias: "SegmentsOverlap", vr: Exact(CS), vm: "1" },
    E { tag: Single(TRACKING_ID), alias: "TrackingID", vr: Exact(UT), vm: "1" },
    E { tag: Single(TRACKING_UID), alias: "TrackingUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(GRAPHIC_ANNOTATION_SEQUENCE), alias: "GraphicAnnotationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(GRAPHIC_LAYER), alias: "GraphicLayer", vr: Exact(CS), vm: "1" },
    E { tag: Single(BOUNDING_BOX_ANNOTATION_UNITS), alias: "BoundingBoxAnnotationUnits", vr: Exact(CS), vm: "1" },
    E { tag: Single(ANCHOR_POINT_ANNOTATION_UNITS), alias: "AnchorPointAnnotationUnits", vr: Exact(CS), vm: "1" },
    E { tag: Single(GRAPHIC_ANNOTATION_UNITS), alias: "GraphicAnnotationUnits", vr: Exact(CS), vm: "1" },
    E { tag: Single(UNFORMATTED_TEXT_VALUE), alias: "UnformattedTextValue", vr: Exact(ST), vm: "1" },
    E { tag: Single(TEXT_OBJECT_SEQUENCE), alias: "TextObjectSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(GRAPHIC_OBJECT_SEQUENCE), alias: "GraphicObjectSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(BOUNDING_BOX_TOP_LEFT_HAND_CORNER), alias: "BoundingBoxTopLeftHandCorner", vr: Exact(FL), vm: "2" },
    E { tag: Single(BOUNDING_BOX_BOTTOM_RIGHT_HAND_CORNER), alias: "BoundingBoxBottomRightHandCorner", vr: Exact(FL), vm: "2" },
    E { tag: Single(BOUNDING_BOX_TEXT_HORIZONTAL_JUSTIFICATION), alias: "BoundingBoxTextHorizontalJustification", vr: Exact(CS), vm: "1" },
    E { tag: Single(ANCHOR_POINT), alias: "AnchorPoint", vr: Exact(FL), vm: "2" },
    E { tag: Single(ANCHOR_POINT_VISIBILITY), alias: "AnchorPointVisibility", vr: Exact(CS), vm: "1" },
    E { tag: Single(GRAPHIC_DIMENSIONS), alias: "GraphicDimensions", vr: Exact(US), vm: "1" },
    E { tag: Single(NUMBER_OF_GRAPHIC_POINTS), alias: "NumberOfGraphicPoints", vr: Exact(US), vm: "1" },
    E { tag: Single(GRAPHIC_DATA), alias: "GraphicData", vr: Exact(FL), vm: "2-n" },
    E { tag: Single(GRAPHIC_TYPE), alias: "GraphicType", vr: Exact(CS), vm: "1" },
    E { tag: Single(GRAPHIC_FILLED), alias: "GraphicFilled", vr: Exact(CS), vm: "1" },
    E { tag: Single(IMAGE_HORIZONTAL_FLIP), alias: "ImageHorizontalFlip", vr: Exact(CS), vm: "1" },
    E { tag: Single(IMAGE_ROTATION), alias: "ImageRotation", vr: Exact(US), vm: "1" },
    E { tag: Single(DISPLAYED_AREA_TOP_LEFT_HAND_CORNER), alias: "DisplayedAreaTopLeftHandCorner", vr: Exact(SL), vm: "2" },
    E { tag: Single(DISPLAYED_AREA_BOTTOM_RIGHT_HAND_CORNER), alias: "DisplayedAreaBottomRightHandCorner", vr: Exact(SL), vm: "2" },
    E { tag: Single(DISPLAYED_AREA_SELECTION_SEQUENCE), alias: "DisplayedAreaSelectionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(GRAPHIC_LAYER_SEQUENCE), alias: "GraphicLayerSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(GRAPHIC_LAYER_ORDER), alias: "GraphicLayerOrder", vr: Exact(IS), vm: "1" },
    E { tag: Single(GRAPHIC_LAYER_RECOMMENDED_DISPLAY_GRAYSCALE_VALUE), alias: "GraphicLayerRecommendedDisplayGrayscaleValue", vr: Exact(US), vm: "1" },
    E { tag: Single(GRAPHIC_LAYER_DESCRIPTION), alias: "GraphicLayerDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(CONTENT_LABEL), alias: "ContentLabel", vr: Exact(CS), vm: "1" },
    E { tag: Single(CONTENT_DESCRIPTION), alias: "ContentDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(PRESENTATION_CREATION_DATE), alias: "PresentationCreationDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(PRESENTATION_CREATION_TIME), alias: "PresentationCreationTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(CONTENT_CREATOR_NAME), alias: "ContentCreatorName", vr: Exact(PN), vm: "1" },
    E { tag: Single(CONTENT_CREATOR_IDENTIFICATION_CODE_SEQUENCE), alias: "ContentCreatorIdentificationCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ALTERNATE_CONTENT_DESCRIPTION_SEQUENCE), alias: "AlternateContentDescriptionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PRESENTATION_SIZE_MODE), alias: "PresentationSizeMode", vr: Exact(CS), vm: "1" },
    E { tag: Single(PRESENTATION_PIXEL_SPACING), alias: "PresentationPixelSpacing", vr: Exact(DS), vm: "2" },
    E { tag: Single(PRESENTATION_PIXEL_ASPECT_RATIO), alias: "PresentationPixelAspectRatio", vr: Exact(IS), vm: "2" },
    E { tag: Single(PRESENTATION_PIXEL_MAGNIFICATION_RATIO), alias: "PresentationPixelMagnificationRatio", vr: Exact(FL), vm: "1" },
    E { tag: Single(GRAPHIC_GROUP_LABEL), alias: "GraphicGroupLabel", vr: Exact(LO), vm: "1" },
    E { tag: Single(GRAPHIC_GROUP_DESCRIPTION), alias: "GraphicGroupDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(COMPOUND_GRAPHIC_SEQUENCE), alias: "CompoundGraphicSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(COMPOUND_GRAPHIC_INSTANCE_ID), alias: "CompoundGraphicInstanceID", vr: Exact(UL), vm: "1" },
    E { tag: Single(FONT_NAME), alias: "FontName", vr: Exact(LO), vm: "1" },
    E { tag: Single(FONT_NAME_TYPE), alias: "FontNameType", vr: Exact(CS), vm: "1" },
    E { tag: Single(CSS_FONT_NAME), alias: "CSSFontName", vr: Exact(LO), vm: "1" },
    E { tag: Single(ROTATION_ANGLE), alias: "RotationAngle", vr: Exact(FD), vm: "1" },
    E { tag: Single(TEXT_STYLE_SEQUENCE), alias: "TextStyleSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(LINE_STYLE_SEQUENCE), alias: "LineStyleSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(FILL_STYLE_SEQUENCE), alias: "FillStyleSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(GRAPHIC_GROUP_SEQUENCE), alias: "GraphicGroupSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TEXT_COLOR_CIE_LAB_VALUE), alias: "TextColorCIELabValue", vr: Exact(US), vm: "3" },
    E { tag: Single(HORIZONTAL_ALIGNMENT), alias: "HorizontalAlignment", vr: Exact(CS), vm: "1" },
    E { tag: Single(VERTICAL_ALIGNMENT), alias: "VerticalAlignment", vr: Exact(CS), vm: "1" },
    E { tag: Single(SHADOW_STYLE), alias: "ShadowStyle", vr: Exact(CS), vm: "1" },
    E { tag: Single(SHADOW_OFFSET_X), alias: "ShadowOffsetX", vr: Exact(FL), vm: "1" },
    E { tag: Single(SHADOW_OFFSET_Y), alias: "ShadowOffsetY", vr: Exact(FL), vm: "1" },
    E { tag: Single(SHADOW_COLOR_CIE_LAB_VALUE), alias: "ShadowColorCIELabValue", vr: Exact(US), vm: "3" },
    E { tag: Single(UNDERLINED), alias: "Underlined", vr: Exact(CS), vm: "1" },
    E { tag: Single(BOLD), alias: "Bold", vr: Exact(CS), vm: "1" },
    E { tag: Single(ITALIC), alias: "Italic", vr: Exact(CS), vm: "1" },
    E { tag: Single(PATTERN_ON_COLOR_CIE_LAB_VALUE), alias: "PatternOnColorCIELabValue", vr: Exact(US), vm: "3" },
    E { tag: Single(PATTERN_OFF_COLOR_CIE_LAB_VALUE), alias: "PatternOffColorCIELabValue", vr: Exact(US), vm: "3" },
    E { tag: Single(LINE_THICKNESS), alias: "LineThickness", vr: Exact(FL), vm: "1" },
    E { tag: Single(LINE_DASHING_STYLE), alias: "LineDashingStyle", vr: Exact(CS), vm: "1" },
    E { tag: Single(LINE_PATTERN), alias: "LinePattern", vr: Exact(UL), vm: "1" },
    E { tag: Single(FILL_PATTERN), alias: "FillPattern", vr: Exact(OB), vm: "1" },
    E { tag: Single(FILL_MODE), alias: "FillMode", vr: Exact(CS), vm: "1" },
    E { tag: Single(SHADOW_OPACITY), alias: "ShadowOpacity", vr: Exact(FL), vm: "1" },
    E { tag: Single(GAP_LENGTH), alias: "GapLength", vr: Exact(FL), vm: "1" },
    E { tag: Single(DIAMETER_OF_VISIBILITY), alias: "DiameterOfVisibility", vr: Exact(FL), vm: "1" },
    E { tag: Single(ROTATION_POINT), alias: "RotationPoint", vr: Exact(FL), vm: "2" },
    E { tag: Single(TICK_ALIGNMENT), alias: "TickAlignment", vr: Exact(CS), vm: "1" },
    E { tag: Single(SHOW_TICK_LABEL), alias: "ShowTickLabel", vr: Exact(CS), vm: "1" },
    E { tag: Single(TICK_LABEL_ALIGNMENT), alias: "TickLabelAlignment", vr: Exact(CS), vm: "1" },
    E { tag: Single(COMPOUND_GRAPHIC_UNITS), alias: "CompoundGraphicUnits", vr: Exact(CS), vm: "1" },
    E { tag: Single(PATTERN_ON_OPACITY), alias: "PatternOnOpacity", vr: Exact(FL), vm: "1" },
    E { tag: Single(PATTERN_OFF_OPACITY), alias: "PatternOffOpacity", vr: Exact(FL), vm: "1" },
    E { tag: Single(MAJOR_TICKS_SEQUENCE), alias: "MajorTicksSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TICK_POSITION), alias: "TickPosition", vr: Exact(FL), vm: "1" },
    E { tag: Single(TICK_LABEL), alias: "TickLabel", vr: Exact(SH), vm: "1" },
    E { tag: Single(COMPOUND_GRAPHIC_TYPE), alias: "CompoundGraphicType", vr: Exact(CS), vm: "1" },
    E { tag: Single(GRAPHIC_GROUP_ID), alias: "GraphicGroupID", vr: Exact(UL), vm: "1" },
    E { tag: Single(SHAPE_TYPE), alias: "ShapeType", vr: Exact(CS), vm: "1" },
    E { tag: Single(REGISTRATION_SEQUENCE), alias: "RegistrationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MATRIX_REGISTRATION_SEQUENCE), alias: "MatrixRegistrationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MATRIX_SEQUENCE), alias: "MatrixSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(FRAME_OF_REFERENCE_TRANSFORMATION_MATRIX_TYPE), alias: "FrameOfReferenceTransformationMatrixType", vr: Exact(CS), vm: "1" },
    E { tag: Single(REGISTRATION_TYPE_CODE_SEQUENCE), alias: "RegistrationTypeCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(FIDUCIAL_DESCRIPTION), alias: "FiducialDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(FIDUCIAL_IDENTIFIER), alias: "FiducialIdentifier", vr: Exact(SH), vm: "1" },
    E { tag: Single(FIDUCIAL_IDENTIFIER_CODE_SEQUENCE), alias: "FiducialIdentifierCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONTOUR_UNCERTAINTY_RADIUS), alias: "ContourUncertaintyRadius", vr: Exact(FD), vm: "1" },
    E { tag: Single(USED_FIDUCIALS_SEQUENCE), alias: "UsedFiducialsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(GRAPHIC_COORDINATES_DATA_SEQUENCE), alias: "GraphicCoordinatesDataSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(FIDUCIAL_UID), alias: "FiducialUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(FIDUCIAL_SET_SEQUENCE), alias: "FiducialSetSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(FIDUCIAL_SEQUENCE), alias: "FiducialSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(GRAPHIC_LAYER_RECOMMENDED_DISPLAY_CIE_LAB_VALUE), alias: "GraphicLayerRecommendedDisplayCIELabValue", vr: Exact(US), vm: "3" },
    E { tag: Single(BLENDING_SEQUENCE), alias: "BlendingSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RELATIVE_OPACITY), alias: "RelativeOpacity", vr: Exact(FL), vm: "1" },
    E { tag: Single(REFERENCED_SPATIAL_REGISTRATION_SEQUENCE), alias: "ReferencedSpatialRegistrationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(BLENDING_POSITION), alias: "BlendingPosition", vr: Exact(CS), vm: "1" },
    E { tag: Single(STORAGE_MEDIA_FILE_SET_ID), alias: "StorageMediaFileSetID", vr: Exact(SH), vm: "1" },
    E { tag: Single(STORAGE_MEDIA_FILE_SET_UID), alias: "StorageMediaFileSetUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(ICON_IMAGE_SEQUENCE), alias: "IconImageSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TOPIC_TITLE), alias: "TopicTitle", vr: Exact(LO), vm: "1" },
    E { tag: Single(TOPIC_SUBJECT), alias: "TopicSubject", vr: Exact(ST), vm: "1" },
    E { tag: Single(TOPIC_AUTHOR), alias: "TopicAuthor", vr: Exact(LO), vm: "1" },
    E { tag: Single(TOPIC_KEYWORDS), alias: "TopicKeywords", vr: Exact(LO), vm: "1-32" },
    E { tag: Single(SOP_INSTANCE_STATUS), alias: "SOPInstanceStatus", vr: Exact(CS), vm: "1" },
    E { tag: Single(SOP_AUTHORIZATION_DATE_TIME), alias: "SOPAuthorizationDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(SOP_AUTHORIZATION_COMMENT), alias: "SOPAuthorizationComment", vr: Exact(LT), vm: "1" },
    E { tag: Single(AUTHORIZATION_EQUIPMENT_CERTIFICATION_NUMBER), alias: "AuthorizationEquipmentCertificationNumber", vr: Exact(LO), vm: "1" },
    E { tag: Single(MACID_NUMBER), alias: "MACIDNumber", vr: Exact(US), vm: "1" },
    E { tag: Single(MAC_CALCULATION_TRANSFER_SYNTAX_UID), alias: "MACCalculationTransferSyntaxUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(MAC_ALGORITHM), alias: "MACAlgorithm", vr: Exact(CS), vm: "1" },
    E { tag: Single(DATA_ELEMENTS_SIGNED), alias: "DataElementsSigned", vr: Exact(AT), vm: "1-n" },
    E { tag: Single(DIGITAL_SIGNATURE_UID), alias: "DigitalSignatureUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(DIGITAL_SIGNATURE_DATE_TIME), alias: "DigitalSignatureDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(CERTIFICATE_TYPE), alias: "CertificateType", vr: Exact(CS), vm: "1" },
    E { tag: Single(CERTIFICATE_OF_SIGNER), alias: "CertificateOfSigner", vr: Exact(OB), vm: "1" },
    E { tag: Single(SIGNATURE), alias: "Signature", vr: Exact(OB), vm: "1" },
    E { tag: Single(CERTIFIED_TIMESTAMP_TYPE), alias: "CertifiedTimestampType", vr: Exact(CS), vm: "1" },
    E { tag: Single(CERTIFIED_TIMESTAMP), alias: "CertifiedTimestamp", vr: Exact(OB), vm: "1" },
    E { tag: Single(DIGITAL_SIGNATURE_PURPOSE_CODE_SEQUENCE), alias: "DigitalSignaturePurposeCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_DIGITAL_SIGNATURE_SEQUENCE), alias: "ReferencedDigitalSignatureSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_SOP_INSTANCE_MAC_SEQUENCE), alias: "ReferencedSOPInstanceMACSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(MAC), alias: "MAC", vr: Exact(OB), vm: "1" },
    E { tag: Single(ENCRYPTED_ATTRIBUTES_SEQUENCE), alias: "EncryptedAttributesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ENCRYPTED_CONTENT_TRANSFER_SYNTAX_UID), alias: "EncryptedContentTransferSyntaxUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(ENCRYPTED_CONTENT), alias: "EncryptedContent", vr: Exact(OB), vm: "1" },
    E { tag: Single(MODIFIED_ATTRIBUTES_SEQUENCE), alias: "ModifiedAttributesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(NONCONFORMING_MODIFIED_ATTRIBUTES_SEQUENCE), alias: "NonconformingModifiedAttributesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(NONCONFORMING_DATA_ELEMENT_VALUE), alias: "NonconformingDataElementValue", vr: Exact(OB), vm: "1" },
    E { tag: Single(ORIGINAL_ATTRIBUTES_SEQUENCE), alias: "OriginalAttributesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ATTRIBUTE_MODIFICATION_DATE_TIME), alias: "AttributeModificationDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(MODIFYING_SYSTEM), alias: "ModifyingSystem", vr: Exact(LO), vm: "1" },
    E { tag: Single(SOURCE_OF_PREVIOUS_VALUES), alias: "SourceOfPreviousValues", vr: Exact(LO), vm: "1" },
    E { tag: Single(REASON_FOR_THE_ATTRIBUTE_MODIFICATION), alias: "ReasonForTheAttributeModification", vr: Exact(CS), vm: "1" },
    E { tag: Single(PRESENTATION_LUT_SEQUENCE), alias: "PresentationLUTSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PRESENTATION_LUT_SHAPE), alias: "PresentationLUTShape", vr: Exact(CS), vm: "1" },
    E { tag: Single(REFERENCED_PRESENTATION_LUT_SEQUENCE), alias: "ReferencedPresentationLUTSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RT_IMAGE_LABEL), alias: "RTImageLabel", vr: Exact(SH), vm: "1" },
    E { tag: Single(RT_IMAGE_NAME), alias: "RTImageName", vr: Exact(LO), vm: "1" },
    E { tag: Single(RT_IMAGE_DESCRIPTION), alias: "RTImageDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(REPORTED_VALUES_ORIGIN), alias: "ReportedValuesOrigin", vr: Exact(CS), vm: "1" },
    E { tag: Single(RT_IMAGE_PLANE), alias: "RTImagePlane", vr: Exact(CS), vm: "1" },
    E { tag: Single(X_RAY_IMAGE_RECEPTOR_TRANSLATION), alias: "XRayImageReceptorTranslation", vr: Exact(DS), vm: "3" },
    E { tag: Single(X_RAY_IMAGE_RECEPTOR_ANGLE), alias: "XRayImageReceptorAngle", vr: Exact(DS), vm: "1" },
    E { tag: Single(RT_IMAGE_ORIENTATION), alias: "RTImageOrientation", vr: Exact(DS), vm: "6" },
    E { tag: Single(IMAGE_PLANE_PIXEL_SPACING), alias: "ImagePlanePixelSpacing", vr: Exact(DS), vm: "2" },
    E { tag: Single(RT_IMAGE_POSITION), alias: "RTImagePosition", vr: Exact(DS), vm: "2" },
    E { tag: Single(RADIATION_MACHINE_NAME), alias: "RadiationMachineName", vr: Exact(SH), vm: "1" },
    E { tag: Single(RADIATION_MACHINE_SAD), alias: "RadiationMachineSAD", vr: Exact(DS), vm: "1" },
    E { tag: Single(RADIATION_MACHINE_SSD), alias: "RadiationMachineSSD", vr: Exact(DS), vm: "1" },
    E { tag: Single(RT_IMAGE_SID), alias: "RTImageSID", vr: Exact(DS), vm: "1" },
    E { tag: Single(SOURCE_TO_REFERENCE_OBJECT_DISTANCE), alias: "SourceToReferenceObjectDistance", vr: Exact(DS), vm: "1" },
    E { tag: Single(FRACTION_NUMBER), alias: "FractionNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(EXPOSURE_SEQUENCE), alias: "ExposureSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(METERSET_EXPOSURE), alias: "MetersetExposure", vr: Exact(DS), vm: "1" },
    E { tag: Single(DIAPHRAGM_POSITION), alias: "DiaphragmPosition", vr: Exact(DS), vm: "4" },
    E { tag: Single(FLUENCE_MAP_SEQUENCE), alias: "FluenceMapSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(FLUENCE_DATA_SOURCE), alias: "FluenceDataSource", vr: Exact(CS), vm: "1" },
    E { tag: Single(FLUENCE_DATA_SCALE), alias: "FluenceDataScale", vr: Exact(DS), vm: "1" },
    E { tag: Single(PRIMARY_FLUENCE_MODE_SEQUENCE), alias: "PrimaryFluenceModeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(FLUENCE_MODE), alias: "FluenceMode", vr: Exact(CS), vm: "1" },
    E { tag: Single(FLUENCE_MODE_ID), alias: "FluenceModeID", vr: Exact(SH), vm: "1" },
    E { tag: Single(DVH_TYPE), alias: "DVHType", vr: Exact(CS), vm: "1" },
    E { tag: Single(DOSE_UNITS), alias: "DoseUnits", vr: Exact(CS), vm: "1" },
    E { tag: Single(DOSE_TYPE), alias: "DoseType", vr: Exact(CS), vm: "1" },
    E { tag: Single(SPATIAL_TRANSFORM_OF_DOSE), alias: "SpatialTransformOfDose", vr: Exact(CS), vm: "1" },
    E { tag: Single(DOSE_COMMENT), alias: "DoseComment", vr: Exact(LO), vm: "1" },
    E { tag: Single(NORMALIZATION_POINT), alias: "NormalizationPoint", vr: Exact(DS), vm: "3" },
    E { tag: Single(DOSE_SUMMATION_TYPE), alias: "DoseSummationType", vr: Exact(CS), vm: "1" },
    E { tag: Single(GRID_FRAME_OFFSET_VECTOR), alias: "GridFrameOffsetVector", vr: Exact(DS), vm: "2-n" },
    E { tag: Single(DOSE_GRID_SCALING), alias: "DoseGridScaling", vr: Exact(DS), vm: "1" },
    E { tag: Single(RT_DOSE_ROI_SEQUENCE), alias: "RTDoseROISequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DOSE_VALUE), alias: "DoseValue", vr: Exact(DS), vm: "1" },
    E { tag: Single(TISSUE_HETEROGENEITY_CORRECTION), alias: "TissueHeterogeneityCorrection", vr: Exact(CS), vm: "1-3" },
    E { tag: Single(DVH_NORMALIZATION_POINT), alias: "DVHNormalizationPoint", vr: Exact(DS), vm: "3" },
    E { tag: Single(DVH_NORMALIZATION_DOSE_VALUE), alias: "DVHNormalizationDoseValue", vr: Exact(DS), vm: "1" },
    E { tag: Single(DVH_SEQUENCE), alias: "DVHSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DVH_DOSE_SCALING), alias: "DVHDoseScaling", vr: Exact(DS), vm: "1" },
    E { tag: Single(DVH_VOLUME_UNITS), alias: "DVHVolumeUnits", vr: Exact(CS), vm: "1" },
    E { tag: Single(DVH_NUMBER_OF_BINS), alias: "DVHNumberOfBins", vr: Exact(IS), vm: "1" },
    E { tag: Single(DVH_DATA), alias: "DVHData", vr: Exact(DS), vm: "2-2n" },
    E { tag: Single(DVH_REFERENCED_ROI_SEQUENCE), alias: "DVHReferencedROISequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DVHROI_CONTRIBUTION_TYPE), alias: "DVHROIContributionType", vr: Exact(CS), vm: "1" },
    E { tag: Single(DVH_MINIMUM_DOSE), alias: "DVHMinimumDose", vr: Exact(DS), vm: "1" },
    E { tag: Single(DVH_MAXIMUM_DOSE), alias: "DVHMaximumDose", vr: Exact(DS), vm: "1" },
    E { tag: Single(DVH_MEAN_DOSE), alias: "DVHMeanDose", vr: Exact(DS), vm: "1" },
    E { tag: Single(STRUCTURE_SET_LABEL), alias: "StructureSetLabel", vr: Exact(SH), vm: "1" },
    E { tag: Single(STRUCTURE_SET_NAME), alias: "StructureSetName", vr: Exact(LO), vm: "1" },
    E { tag: Single(STRUCTURE_SET_DESCRIPTION), alias: "StructureSetDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(STRUCTURE_SET_DATE), alias: "StructureSetDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(STRUCTURE_SET_TIME), alias: "StructureSetTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(REFERENCED_FRAME_OF_REFERENCE_SEQUENCE), alias: "ReferencedFrameOfReferenceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RT_REFERENCED_STUDY_SEQUENCE), alias: "RTReferencedStudySequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RT_REFERENCED_SERIES_SEQUENCE), alias: "RTReferencedSeriesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONTOUR_IMAGE_SEQUENCE), alias: "ContourImageSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PREDECESSOR_STRUCTURE_SET_SEQUENCE), alias: "PredecessorStructureSetSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(STRUCTURE_SET_ROI_SEQUENCE), alias: "StructureSetROISequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ROI_NUMBER), alias: "ROINumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(REFERENCED_FRAME_OF_REFERENCE_UID), alias: "ReferencedFrameOfReferenceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(ROI_NAME), alias: "ROIName", vr: Exact(LO), vm: "1" },
    E { tag: Single(ROI_DESCRIPTION), alias: "ROIDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(ROI_DISPLAY_COLOR), alias: "ROIDisplayColor", vr: Exact(IS), vm: "3" },
    E { tag: Single(ROI_VOLUME), alias: "ROIVolume", vr: Exact(DS), vm: "1" },
    E { tag: Single(ROI_DATE_TIME), alias: "ROIDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(ROI_OBSERVATION_DATE_TIME), alias: "ROIObservationDateTime", vr: Exact(DT), vm: "1" },
    E { tag: Single(RT_RELATED_ROI_SEQUENCE), alias: "RTRelatedROISequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RTROI_RELATIONSHIP), alias: "RTROIRelationship", vr: Exact(CS), vm: "1" },
    E { tag: Single(ROI_GENERATION_ALGORITHM), alias: "ROIGenerationAlgorithm", vr: Exact(CS), vm: "1" },
    E { tag: Single(ROI_DERIVATION_ALGORITHM_IDENTIFICATION_SEQUENCE), alias: "ROIDerivationAlgorithmIdentificationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ROI_GENERATION_DESCRIPTION), alias: "ROIGenerationDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(ROI_CONTOUR_SEQUENCE), alias: "ROIContourSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONTOUR_SEQUENCE), alias: "ContourSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONTOUR_GEOMETRIC_TYPE), alias: "ContourGeometricType", vr: Exact(CS), vm: "1" },
    E { tag: Single(CONTOUR_SLAB_THICKNESS), alias: "ContourSlabThickness", vr: Exact(DS), vm: "1" },
    E { tag: Single(CONTOUR_OFFSET_VECTOR), alias: "ContourOffsetVector", vr: Exact(DS), vm: "3" },
    E { tag: Single(NUMBER_OF_CONTOUR_POINTS), alias: "NumberOfContourPoints", vr: Exact(IS), vm: "1" },
    E { tag: Single(CONTOUR_NUMBER), alias: "ContourNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(ATTACHED_CONTOURS), alias: "AttachedContours", vr: Exact(IS), vm: "1-n" },
    E { tag: Single(CONTOUR_DATA), alias: "ContourData", vr: Exact(DS), vm: "3-3n" },
    E { tag: Single(RTROI_OBSERVATIONS_SEQUENCE), alias: "RTROIObservationsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(OBSERVATION_NUMBER), alias: "ObservationNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(REFERENCED_ROI_NUMBER), alias: "ReferencedROINumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(ROI_OBSERVATION_LABEL), alias: "ROIObservationLabel", vr: Exact(SH), vm: "1" },
    E { tag: Single(RTROI_IDENTIFICATION_CODE_SEQUENCE), alias: "RTROIIdentificationCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ROI_OBSERVATION_DESCRIPTION), alias: "ROIObservationDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(RELATED_RTROI_OBSERVATIONS_SEQUENCE), alias: "RelatedRTROIObservationsSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RTROI_INTERPRETED_TYPE), alias: "RTROIInterpretedType", vr: Exact(CS), vm: "1" },
    E { tag: Single(ROI_INTERPRETER), alias: "ROIInterpreter", vr: Exact(PN), vm: "1" },
    E { tag: Single(ROI_PHYSICAL_PROPERTIES_SEQUENCE), alias: "ROIPhysicalPropertiesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ROI_PHYSICAL_PROPERTY), alias: "ROIPhysicalProperty", vr: Exact(CS), vm: "1" },
    E { tag: Single(ROI_PHYSICAL_PROPERTY_VALUE), alias: "ROIPhysicalPropertyValue", vr: Exact(DS), vm: "1" },
    E { tag: Single(ROI_ELEMENTAL_COMPOSITION_SEQUENCE), alias: "ROIElementalCompositionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(ROI_ELEMENTAL_COMPOSITION_ATOMIC_NUMBER), alias: "ROIElementalCompositionAtomicNumber", vr: Exact(US), vm: "1" },
    E { tag: Single(ROI_ELEMENTAL_COMPOSITION_ATOMIC_MASS_FRACTION), alias: "ROIElementalCompositionAtomicMassFraction", vr: Exact(FL), vm: "1" },
    E { tag: Single(FRAME_OF_REFERENCE_RELATIONSHIP_SEQUENCE), alias: "FrameOfReferenceRelationshipSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RELATED_FRAME_OF_REFERENCE_UID), alias: "RelatedFrameOfReferenceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(FRAME_OF_REFERENCE_TRANSFORMATION_TYPE), alias: "FrameOfReferenceTransformationType", vr: Exact(CS), vm: "1" },
    E { tag: Single(FRAME_OF_REFERENCE_TRANSFORMATION_MATRIX), alias: "FrameOfReferenceTransformationMatrix", vr: Exact(DS), vm: "16" },
    E { tag: Single(FRAME_OF_REFERENCE_TRANSFORMATION_COMMENT), alias: "FrameOfReferenceTransformationComment", vr: Exact(LO), vm: "1" },
    E { tag: Single(RT_PLAN_LABEL), alias: "RTPlanLabel", vr: Exact(SH), vm: "1" },
    E { tag: Single(RT_PLAN_NAME), alias: "RTPlanName", vr: Exact(LO), vm: "1" },
    E { tag: Single(RT_PLAN_DESCRIPTION), alias: "RTPlanDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(RT_PLAN_DATE), alias: "RTPlanDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(RT_PLAN_TIME), alias: "RTPlanTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(TREATMENT_PROTOCOLS), alias: "TreatmentProtocols", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(PLAN_INTENT), alias: "PlanIntent", vr: Exact(CS), vm: "1" },
    E { tag: Single(TREATMENT_SITES), alias: "TreatmentSites", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(RT_PLAN_GEOMETRY), alias: "RTPlanGeometry", vr: Exact(CS), vm: "1" },
    E { tag: Single(PRESCRIPTION_DESCRIPTION), alias: "PrescriptionDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(DOSE_REFERENCE_SEQUENCE), alias: "DoseReferenceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DOSE_REFERENCE_NUMBER), alias: "DoseReferenceNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(DOSE_REFERENCE_UID), alias: "DoseReferenceUID", vr: Exact(UI), vm: "1" },
    E { tag: Single(DOSE_REFERENCE_STRUCTURE_TYPE), alias: "DoseReferenceStructureType", vr: Exact(CS), vm: "1" },
    E { tag: Single(NOMINAL_BEAM_ENERGY_UNIT), alias: "NominalBeamEnergyUnit", vr: Exact(CS), vm: "1" },
    E { tag: Single(DOSE_REFERENCE_DESCRIPTION), alias: "DoseReferenceDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(DOSE_REFERENCE_POINT_COORDINATES), alias: "DoseReferencePointCoordinates", vr: Exact(DS), vm: "3" },
    E { tag: Single(NOMINAL_PRIOR_DOSE), alias: "NominalPriorDose", vr: Exact(DS), vm: "1" },
    E { tag: Single(DOSE_REFERENCE_TYPE), alias: "DoseReferenceType", vr: Exact(CS), vm: "1" },
    E { tag: Single(CONSTRAINT_WEIGHT), alias: "ConstraintWeight", vr: Exact(DS), vm: "1" },
    E { tag: Single(DELIVERY_WARNING_DOSE), alias: "DeliveryWarningDose", vr: Exact(DS), vm: "1" },
    E { tag: Single(DELIVERY_MAXIMUM_DOSE), alias: "DeliveryMaximumDose", vr: Exact(DS), vm: "1" },
    E { tag: Single(TARGET_MINIMUM_DOSE), alias: "TargetMinimumDose", vr: Exact(DS), vm: "1" },
    E { tag: Single(TARGET_PRESCRIPTION_DOSE), alias: "TargetPrescriptionDose", vr: Exact(DS), vm: "1" },
    E { tag: Single(TARGET_MAXIMUM_DOSE), alias: "TargetMaximumDose", vr: Exact(DS), vm: "1" },
    E { tag: Single(TARGET_UNDERDOSE_VOLUME_FRACTION), alias: "TargetUnderdoseVolumeFraction", vr: Exact(DS), vm: "1" },
    E { tag: Single(ORGAN_AT_RISK_FULL_VOLUME_DOSE), alias: "OrganAtRiskFullVolumeDose", vr: Exact(DS), vm: "1" },
    E { tag: Single(ORGAN_AT_RISK_LIMIT_DOSE), alias: "OrganAtRiskLimitDose", vr: Exact(DS), vm: "1" },
    E { tag: Single(ORGAN_AT_RISK_MAXIMUM_DOSE), alias: "OrganAtRiskMaximumDose", vr: Exact(DS), vm: "1" },
    E { tag: Single(ORGAN_AT_RISK_OVERDOSE_VOLUME_FRACTION), alias: "OrganAtRiskOverdoseVolumeFraction", vr: Exact(DS), vm: "1" },
    E { tag: Single(TOLERANCE_TABLE_SEQUENCE), alias: "ToleranceTableSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TOLERANCE_TABLE_NUMBER), alias: "ToleranceTableNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(TOLERANCE_TABLE_LABEL), alias: "ToleranceTableLabel", vr: Exact(SH), vm: "1" },
    E { tag: Single(GANTRY_ANGLE_TOLERANCE), alias: "GantryAngleTolerance", vr: Exact(DS), vm: "1" },
    E { tag: Single(BEAM_LIMITING_DEVICE_ANGLE_TOLERANCE), alias: "BeamLimitingDeviceAngleTolerance", vr: Exact(DS), vm: "1" },
    E { tag: Single(BEAM_LIMITING_DEVICE_TOLERANCE_SEQUENCE), alias: "BeamLimitingDeviceToleranceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(BEAM_LIMITING_DEVICE_POSITION_TOLERANCE), alias: "BeamLimitingDevicePositionTolerance", vr: Exact(DS), vm: "1" },
    E { tag: Single(PATIENT_SUPPORT_ANGLE_TOLERANCE), alias: "PatientSupportAngleTolerance", vr: Exact(DS), vm: "1" },
    E { tag: Single(TABLE_TOP_ECCENTRIC_ANGLE_TOLERANCE), alias: "TableTopEccentricAngleTolerance", vr: Exact(DS), vm: "1" },
    E { tag: Single(TABLE_TOP_VERTICAL_POSITION_TOLERANCE), alias: "TableTopVerticalPositionTolerance", vr: Exact(DS), vm: "1" },
    E { tag: Single(TABLE_TOP_LONGITUDINAL_POSITION_TOLERANCE), alias: "TableTopLongitudinalPositionTolerance", vr: Exact(DS), vm: "1" },
    E { tag: Single(TABLE_TOP_LATERAL_POSITION_TOLERANCE), alias: "TableTopLateralPositionTolerance", vr: Exact(DS), vm: "1" },
    E { tag: Single(RT_PLAN_RELATIONSHIP), alias: "RTPlanRelationship", vr: Exact(CS), vm: "1" },
    E { tag: Single(FRACTION_GROUP_SEQUENCE), alias: "FractionGroupSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(FRACTION_GROUP_NUMBER), alias: "FractionGroupNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(FRACTION_GROUP_DESCRIPTION), alias: "FractionGroupDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(NUMBER_OF_FRACTIONS_PLANNED), alias: "NumberOfFractionsPlanned", vr: Exact(IS), vm: "1" },
    E { tag: Single(NUMBER_OF_FRACTION_PATTERN_DIGITS_PER_DAY), alias: "NumberOfFractionPatternDigitsPerDay", vr: Exact(IS), vm: "1" },
    E { tag: Single(REPEAT_FRACTION_CYCLE_LENGTH), alias: "RepeatFractionCycleLength", vr: Exact(IS), vm: "1" },
    E { tag: Single(FRACTION_PATTERN), alias: "FractionPattern", vr: Exact(LT), vm: "1" },
    E { tag: Single(NUMBER_OF_BEAMS), alias: "NumberOfBeams", vr: Exact(IS), vm: "1" },
    E { tag: Single(BEAM_DOSE_SPECIFICATION_POINT), alias: "BeamDoseSpecificationPoint", vr: Exact(DS), vm: "3" },
    E { tag: Single(BEAM_DOSE), alias: "BeamDose", vr: Exact(DS), vm: "1" },
    E { tag: Single(BEAM_METERSET), alias: "BeamMeterset", vr: Exact(DS), vm: "1" },
    E { tag: Single(NUMBER_OF_BRACHY_APPLICATION_SETUPS), alias: "NumberOfBrachyApplicationSetups", vr: Exact(IS), vm: "1" },
    E { tag: Single(BRACHY_APPLICATION_SETUP_DOSE_SPECIFICATION_POINT), alias: "BrachyApplicationSetupDoseSpecificationPoint", vr: Exact(DS), vm: "3" },
    E { tag: Single(BRACHY_APPLICATION_SETUP_DOSE), alias: "BrachyApplicationSetupDose", vr: Exact(DS), vm: "1" },
    E { tag: Single(BEAM_SEQUENCE), alias: "BeamSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(TREATMENT_MACHINE_NAME), alias: "TreatmentMachineName", vr: Exact(SH), vm: "1" },
    E { tag: Single(PRIMARY_DOSIMETER_UNIT), alias: "PrimaryDosimeterUnit", vr: Exact(CS), vm: "1" },
    E { tag: Single(SOURCE_AXIS_DISTANCE), alias: "SourceAxisDistance", vr: Exact(DS), vm: "1" },
    E { tag: Single(BEAM_LIMITING_DEVICE_SEQUENCE), alias: "BeamLimitingDeviceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RT_BEAM_LIMITING_DEVICE_TYPE), alias: "RTBeamLimitingDeviceType", vr: Exact(CS), vm: "1" },
    E { tag: Single(SOURCE_TO_BEAM_LIMITING_DEVICE_DISTANCE), alias: "SourceToBeamLimitingDeviceDistance", vr: Exact(DS), vm: "1" },
    E { tag: Single(ISOCENTER_TO_BEAM_LIMITING_DEVICE_DISTANCE), alias: "IsocenterToBeamLimitingDeviceDistance", vr: Exact(FL), vm: "1" },
    E { tag: Single(NUMBER_OF_LEAF_JAW_PAIRS), alias: "NumberOfLeafJawPairs", vr: Exact(IS), vm: "1" },
    E { tag: Single(LEAF_POSITION_BOUNDARIES), alias: "LeafPositionBoundaries", vr: Exact(DS), vm: "3-n" },
    E { tag: Single(BEAM_NUMBER), alias: "BeamNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(BEAM_NAME), alias: "BeamName", vr: Exact(LO), vm: "1" },
    E { tag: Single(BEAM_DESCRIPTION), alias: "BeamDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(BEAM_TYPE), alias: "BeamType", vr: Exact(CS), vm: "1" },
    E { tag: Single(RADIATION_TYPE), alias: "RadiationType", vr: Exact(CS), vm: "1" },
    E { tag: Single(HIGH_DOSE_TECHNIQUE_TYPE), alias: "HighDoseTechniqueType", vr: Exact(CS), vm: "1" },
    E { tag: Single(REFERENCE_IMAGE_NUMBER), alias: "ReferenceImageNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(PLANNED_VERIFICATION_IMAGE_SEQUENCE), alias: "PlannedVerificationImageSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(IMAGING_DEVICE_SPECIFIC_ACQUISITION_PARAMETERS), alias: "ImagingDeviceSpecificAcquisitionParameters", vr: Exact(LO), vm: "1-n" },
    E { tag: Single(TREATMENT_DELIVERY_TYPE), alias: "TreatmentDeliveryType", vr: Exact(CS), vm: "1" },
    E { tag: Single(NUMBER_OF_WEDGES), alias: "NumberOfWedges", vr: Exact(IS), vm: "1" },
    E { tag: Single(WEDGE_SEQUENCE), alias: "WedgeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(WEDGE_NUMBER), alias: "WedgeNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(WEDGE_TYPE), alias: "WedgeType", vr: Exact(CS), vm: "1" },
    E { tag: Single(WEDGE_ID), alias: "WedgeID", vr: Exact(SH), vm: "1" },
    E { tag: Single(WEDGE_ANGLE), alias: "WedgeAngle", vr: Exact(IS), vm: "1" },
    E { tag: Single(WEDGE_FACTOR), alias: "WedgeFactor", vr: Exact(DS), vm: "1" },
    E { tag: Single(WEDGE_ORIENTATION), alias: "WedgeOrientation", vr: Exact(DS), vm: "1" },
    E { tag: Single(SOURCE_TO_WEDGE_TRAY_DISTANCE), alias: "SourceToWedgeTrayDistance", vr: Exact(DS), vm: "1" },
    E { tag: Single(NUMBER_OF_COMPENSATORS), alias: "NumberOfCompensators", vr: Exact(IS), vm: "1" },
    E { tag: Single(MATERIAL_ID), alias: "MaterialID", vr: Exact(SH), vm: "1" },
    E { tag: Single(TOTAL_COMPENSATOR_TRAY_FACTOR), alias: "TotalCompensatorTrayFactor", vr: Exact(DS), vm: "1" },
    E { tag: Single(COMPENSATOR_SEQUENCE), alias: "CompensatorSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(COMPENSATOR_NUMBER), alias: "CompensatorNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(COMPENSATOR_ID), alias: "CompensatorID", vr: Exact(SH), vm: "1" },
    E { tag: Single(SOURCE_TO_COMPENSATOR_TRAY_DISTANCE), alias: "SourceToCompensatorTrayDistance", vr: Exact(DS), vm: "1" },
    E { tag: Single(COMPENSATOR_ROWS), alias: "CompensatorRows", vr: Exact(IS), vm: "1" },
    E { tag: Single(COMPENSATOR_COLUMNS), alias: "CompensatorColumns", vr: Exact(IS), vm: "1" },
    E { tag: Single(COMPENSATOR_PIXEL_SPACING), alias: "CompensatorPixelSpacing", vr: Exact(DS), vm: "2" },
    E { tag: Single(COMPENSATOR_POSITION), alias: "CompensatorPosition", vr: Exact(DS), vm: "2" },
    E { tag: Single(COMPENSATOR_TRANSMISSION_DATA), alias: "CompensatorTransmissionData", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(COMPENSATOR_THICKNESS_DATA), alias: "CompensatorThicknessData", vr: Exact(DS), vm: "1-n" },
    E { tag: Single(NUMBER_OF_BOLI), alias: "NumberOfBoli", vr: Exact(IS), vm: "1" },
    E { tag: Single(COMPENSATOR_TYPE), alias: "CompensatorType", vr: Exact(CS), vm: "1" },
    E { tag: Single(NUMBER_OF_BLOCKS), alias: "NumberOfBlocks", vr: Exact(IS), vm: "1" },
    E { tag: Single(TOTAL_BLOCK_TRAY_FACTOR), alias: "TotalBlockTrayFactor", vr: Exact(DS), vm: "1" },
    E { tag: Single(BLOCK_SEQUENCE), alias: "BlockSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(BLOCK_TRAY_ID), alias: "BlockTrayID", vr: Exact(SH), vm: "1" },
    E { tag: Single(SOURCE_TO_BLOCK_TRAY_DISTANCE), alias: "SourceToBlockTrayDistance", vr: Exact(DS), vm: "1" },
    E { tag: Single(BLOCK_TYPE), alias: "BlockType", vr: Exact(CS), vm: "1" },
    E { tag: Single(BLOCK_DIVERGENCE), alias: "BlockDivergence", vr: Exact(CS), vm: "1" },
    E { tag: Single(BLOCK_MOUNTING_POSITION), alias: "BlockMountingPosition", vr: Exact(CS), vm: "1" },
    E { tag: Single(BLOCK_NUMBER), alias: "BlockNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(BLOCK_NAME), alias: "BlockName", vr: Exact(LO), vm: "1" },
    E { tag: Single(BLOCK_THICKNESS), alias: "BlockThickness", vr: Exact(DS), vm: "1" },
    E { tag: Single(BLOCK_TRANSMISSION), alias: "BlockTransmission", vr: Exact(DS), vm: "1" },
    E { tag: Single(BLOCK_NUMBER_OF_POINTS), alias: "BlockNumberOfPoints", vr: Exact(IS), vm: "1" },
    E { tag: Single(BLOCK_DATA), alias: "BlockData", vr: Exact(DS), vm: "2-2n" },
    E { tag: Single(APPLICATOR_SEQUENCE), alias: "ApplicatorSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(APPLICATOR_ID), alias: "ApplicatorID", vr: Exact(SH), vm: "1" },
    E { tag: Single(APPLICATOR_TYPE), alias: "ApplicatorType", vr: Exact(CS), vm: "1" },
    E { tag: Single(APPLICATOR_DESCRIPTION), alias: "ApplicatorDescription", vr: Exact(LO), vm: "1" },
    E { tag: Single(CUMULATIVE_DOSE_REFERENCE_COEFFICIENT), alias: "CumulativeDoseReferenceCoefficient", vr: Exact(DS), vm: "1" },
    E { tag: Single(FINAL_CUMULATIVE_METERSET_WEIGHT), alias: "FinalCumulativeMetersetWeight", vr: Exact(DS), vm: "1" },
    E { tag: Single(NUMBER_OF_CONTROL_POINTS), alias: "NumberOfControlPoints", vr: Exact(IS), vm: "1" },
    E { tag: Single(CONTROL_POINT_SEQUENCE), alias: "ControlPointSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONTROL_POINT_INDEX), alias: "ControlPointIndex", vr: Exact(IS), vm: "1" },
    E { tag: Single(NOMINAL_BEAM_ENERGY), alias: "NominalBeamEnergy", vr: Exact(DS), vm: "1" },
    E { tag: Single(DOSE_RATE_SET), alias: "DoseRateSet", vr: Exact(DS), vm: "1" },
    E { tag: Single(WEDGE_POSITION_SEQUENCE), alias: "WedgePositionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(WEDGE_POSITION), alias: "WedgePosition", vr: Exact(CS), vm: "1" },
    E { tag: Single(BEAM_LIMITING_DEVICE_POSITION_SEQUENCE), alias: "BeamLimitingDevicePositionSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(LEAF_JAW_POSITIONS), alias: "LeafJawPositions", vr: Exact(DS), vm: "2-2n" },
    E { tag: Single(GANTRY_ANGLE), alias: "GantryAngle", vr: Exact(DS), vm: "1" },
    E { tag: Single(GANTRY_ROTATION_DIRECTION), alias: "GantryRotationDirection", vr: Exact(CS), vm: "1" },
    E { tag: Single(BEAM_LIMITING_DEVICE_ANGLE), alias: "BeamLimitingDeviceAngle", vr: Exact(DS), vm: "1" },
    E { tag: Single(BEAM_LIMITING_DEVICE_ROTATION_DIRECTION), alias: "BeamLimitingDeviceRotationDirection", vr: Exact(CS), vm: "1" },
    E { tag: Single(PATIENT_SUPPORT_ANGLE), alias: "PatientSupportAngle", vr: Exact(DS), vm: "1" },
    E { tag: Single(PATIENT_SUPPORT_ROTATION_DIRECTION), alias: "PatientSupportRotationDirection", vr: Exact(CS), vm: "1" },
    E { tag: Single(TABLE_TOP_ECCENTRIC_AXIS_DISTANCE), alias: "TableTopEccentricAxisDistance", vr: Exact(DS), vm: "1" },
    E { tag: Single(TABLE_TOP_ECCENTRIC_ANGLE), alias: "TableTopEccentricAngle", vr: Exact(DS), vm: "1" },
    E { tag: Single(TABLE_TOP_ECCENTRIC_ROTATION_DIRECTION), alias: "TableTopEccentricRotationDirection", vr: Exact(CS), vm: "1" },
    E { tag: Single(TABLE_TOP_VERTICAL_POSITION), alias: "TableTopVerticalPosition", vr: Exact(DS), vm: "1" },
    E { tag: Single(TABLE_TOP_LONGITUDINAL_POSITION), alias: "TableTopLongitudinalPosition", vr: Exact(DS), vm: "1" },
    E { tag: Single(TABLE_TOP_LATERAL_POSITION), alias: "TableTopLateralPosition", vr: Exact(DS), vm: "1" },
    E { tag: Single(ISOCENTER_POSITION), alias: "IsocenterPosition", vr: Exact(DS), vm: "3" },
    E { tag: Single(SURFACE_ENTRY_POINT), alias: "SurfaceEntryPoint", vr: Exact(DS), vm: "3" },
    E { tag: Single(SOURCE_TO_SURFACE_DISTANCE), alias: "SourceToSurfaceDistance", vr: Exact(DS), vm: "1" },
    E { tag: Single(CUMULATIVE_METERSET_WEIGHT), alias: "CumulativeMetersetWeight", vr: Exact(DS), vm: "1" },
    E { tag: Single(TABLE_TOP_PITCH_ANGLE), alias: "TableTopPitchAngle", vr: Exact(FL), vm: "1" },
    E { tag: Single(TABLE_TOP_PITCH_ROTATION_DIRECTION), alias: "TableTopPitchRotationDirection", vr: Exact(CS), vm: "1" },
    E { tag: Single(TABLE_TOP_ROLL_ANGLE), alias: "TableTopRollAngle", vr: Exact(FL), vm: "1" },
    E { tag: Single(TABLE_TOP_ROLL_ROTATION_DIRECTION), alias: "TableTopRollRotationDirection", vr: Exact(CS), vm: "1" },
    E { tag: Single(PATIENT_SETUP_SEQUENCE), alias: "PatientSetupSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(PATIENT_SETUP_NUMBER), alias: "PatientSetupNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(PATIENT_SETUP_LABEL), alias: "PatientSetupLabel", vr: Exact(LO), vm: "1" },
    E { tag: Single(PATIENT_ADDITIONAL_POSITION), alias: "PatientAdditionalPosition", vr: Exact(LO), vm: "1" },
    E { tag: Single(FIXATION_DEVICE_SEQUENCE), alias: "FixationDeviceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(FIXATION_DEVICE_TYPE), alias: "FixationDeviceType", vr: Exact(CS), vm: "1" },
    E { tag: Single(FIXATION_DEVICE_LABEL), alias: "FixationDeviceLabel", vr: Exact(SH), vm: "1" },
    E { tag: Single(FIXATION_DEVICE_DESCRIPTION), alias: "FixationDeviceDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(FIXATION_DEVICE_POSITION), alias: "FixationDevicePosition", vr: Exact(SH), vm: "1" },
    E { tag: Single(SHIELDING_DEVICE_SEQUENCE), alias: "ShieldingDeviceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SHIELDING_DEVICE_TYPE), alias: "ShieldingDeviceType", vr: Exact(CS), vm: "1" },
    E { tag: Single(SHIELDING_DEVICE_LABEL), alias: "ShieldingDeviceLabel", vr: Exact(SH), vm: "1" },
    E { tag: Single(SHIELDING_DEVICE_DESCRIPTION), alias: "ShieldingDeviceDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(SHIELDING_DEVICE_POSITION), alias: "ShieldingDevicePosition", vr: Exact(SH), vm: "1" },
    E { tag: Single(SETUP_TECHNIQUE), alias: "SetupTechnique", vr: Exact(CS), vm: "1" },
    E { tag: Single(SETUP_TECHNIQUE_DESCRIPTION), alias: "SetupTechniqueDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(SETUP_DEVICE_SEQUENCE), alias: "SetupDeviceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SETUP_DEVICE_TYPE), alias: "SetupDeviceType", vr: Exact(CS), vm: "1" },
    E { tag: Single(SETUP_DEVICE_LABEL), alias: "SetupDeviceLabel", vr: Exact(SH), vm: "1" },
    E { tag: Single(SETUP_DEVICE_DESCRIPTION), alias: "SetupDeviceDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(SETUP_DEVICE_PARAMETER), alias: "SetupDeviceParameter", vr: Exact(DS), vm: "1" },
    E { tag: Single(SETUP_REFERENCE_DESCRIPTION), alias: "SetupReferenceDescription", vr: Exact(ST), vm: "1" },
    E { tag: Single(TABLE_TOP_VERTICAL_SETUP_DISPLACEMENT), alias: "TableTopVerticalSetupDisplacement", vr: Exact(DS), vm: "1" },
    E { tag: Single(TABLE_TOP_LONGITUDINAL_SETUP_DISPLACEMENT), alias: "TableTopLongitudinalSetupDisplacement", vr: Exact(DS), vm: "1" },
    E { tag: Single(TABLE_TOP_LATERAL_SETUP_DISPLACEMENT), alias: "TableTopLateralSetupDisplacement", vr: Exact(DS), vm: "1" },
    E { tag: Single(BRACHY_TREATMENT_TECHNIQUE), alias: "BrachyTreatmentTechnique", vr: Exact(CS), vm: "1" },
    E { tag: Single(BRACHY_TREATMENT_TYPE), alias: "BrachyTreatmentType", vr: Exact(CS), vm: "1" },
    E { tag: Single(TREATMENT_MACHINE_SEQUENCE), alias: "TreatmentMachineSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SOURCE_SEQUENCE), alias: "SourceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(SOURCE_NUMBER), alias: "SourceNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(SOURCE_TYPE), alias: "SourceType", vr: Exact(CS), vm: "1" },
    E { tag: Single(SOURCE_MANUFACTURER), alias: "SourceManufacturer", vr: Exact(LO), vm: "1" },
    E { tag: Single(ACTIVE_SOURCE_DIAMETER), alias: "ActiveSourceDiameter", vr: Exact(DS), vm: "1" },
    E { tag: Single(ACTIVE_SOURCE_LENGTH), alias: "ActiveSourceLength", vr: Exact(DS), vm: "1" },
    E { tag: Single(SOURCE_ENCAPSULATION_NOMINAL_THICKNESS), alias: "SourceEncapsulationNominalThickness", vr: Exact(DS), vm: "1" },
    E { tag: Single(SOURCE_ENCAPSULATION_NOMINAL_TRANSMISSION), alias: "SourceEncapsulationNominalTransmission", vr: Exact(DS), vm: "1" },
    E { tag: Single(SOURCE_ISOTOPE_NAME), alias: "SourceIsotopeName", vr: Exact(LO), vm: "1" },
    E { tag: Single(SOURCE_ISOTOPE_HALF_LIFE), alias: "SourceIsotopeHalfLife", vr: Exact(DS), vm: "1" },
    E { tag: Single(SOURCE_STRENGTH_UNITS), alias: "SourceStrengthUnits", vr: Exact(CS), vm: "1" },
    E { tag: Single(REFERENCE_AIR_KERMA_RATE), alias: "ReferenceAirKermaRate", vr: Exact(DS), vm: "1" },
    E { tag: Single(SOURCE_STRENGTH), alias: "SourceStrength", vr: Exact(DS), vm: "1" },
    E { tag: Single(SOURCE_STRENGTH_REFERENCE_DATE), alias: "SourceStrengthReferenceDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(SOURCE_STRENGTH_REFERENCE_TIME), alias: "SourceStrengthReferenceTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(APPLICATION_SETUP_SEQUENCE), alias: "ApplicationSetupSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(APPLICATION_SETUP_TYPE), alias: "ApplicationSetupType", vr: Exact(CS), vm: "1" },
    E { tag: Single(APPLICATION_SETUP_NUMBER), alias: "ApplicationSetupNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(APPLICATION_SETUP_NAME), alias: "ApplicationSetupName", vr: Exact(LO), vm: "1" },
    E { tag: Single(APPLICATION_SETUP_MANUFACTURER), alias: "ApplicationSetupManufacturer", vr: Exact(LO), vm: "1" },
    E { tag: Single(TEMPLATE_NUMBER), alias: "TemplateNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(TEMPLATE_TYPE), alias: "TemplateType", vr: Exact(SH), vm: "1" },
    E { tag: Single(TEMPLATE_NAME), alias: "TemplateName", vr: Exact(LO), vm: "1" },
    E { tag: Single(TOTAL_REFERENCE_AIR_KERMA), alias: "TotalReferenceAirKerma", vr: Exact(DS), vm: "1" },
    E { tag: Single(BRACHY_ACCESSORY_DEVICE_SEQUENCE), alias: "BrachyAccessoryDeviceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(BRACHY_ACCESSORY_DEVICE_NUMBER), alias: "BrachyAccessoryDeviceNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(BRACHY_ACCESSORY_DEVICE_ID), alias: "BrachyAccessoryDeviceID", vr: Exact(SH), vm: "1" },
    E { tag: Single(BRACHY_ACCESSORY_DEVICE_TYPE), alias: "BrachyAccessoryDeviceType", vr: Exact(CS), vm: "1" },
    E { tag: Single(BRACHY_ACCESSORY_DEVICE_NAME), alias: "BrachyAccessoryDeviceName", vr: Exact(LO), vm: "1" },
    E { tag: Single(BRACHY_ACCESSORY_DEVICE_NOMINAL_THICKNESS), alias: "BrachyAccessoryDeviceNominalThickness", vr: Exact(DS), vm: "1" },
    E { tag: Single(BRACHY_ACCESSORY_DEVICE_NOMINAL_TRANSMISSION), alias: "BrachyAccessoryDeviceNominalTransmission", vr: Exact(DS), vm: "1" },
    E { tag: Single(CHANNEL_SEQUENCE), alias: "ChannelSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CHANNEL_NUMBER), alias: "ChannelNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(CHANNEL_LENGTH), alias: "ChannelLength", vr: Exact(DS), vm: "1" },
    E { tag: Single(CHANNEL_TOTAL_TIME), alias: "ChannelTotalTime", vr: Exact(DS), vm: "1" },
    E { tag: Single(SOURCE_MOVEMENT_TYPE), alias: "SourceMovementType", vr: Exact(CS), vm: "1" },
    E { tag: Single(NUMBER_OF_PULSES), alias: "NumberOfPulses", vr: Exact(IS), vm: "1" },
    E { tag: Single(PULSE_REPETITION_INTERVAL), alias: "PulseRepetitionInterval", vr: Exact(DS), vm: "1" },
    E { tag: Single(SOURCE_APPLICATOR_NUMBER), alias: "SourceApplicatorNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(SOURCE_APPLICATOR_ID), alias: "SourceApplicatorID", vr: Exact(SH), vm: "1" },
    E { tag: Single(SOURCE_APPLICATOR_TYPE), alias: "SourceApplicatorType", vr: Exact(CS), vm: "1" },
    E { tag: Single(SOURCE_APPLICATOR_NAME), alias: "SourceApplicatorName", vr: Exact(LO), vm: "1" },
    E { tag: Single(SOURCE_APPLICATOR_LENGTH), alias: "SourceApplicatorLength", vr: Exact(DS), vm: "1" },
    E { tag: Single(SOURCE_APPLICATOR_MANUFACTURER), alias: "SourceApplicatorManufacturer", vr: Exact(LO), vm: "1" },
    E { tag: Single(SOURCE_APPLICATOR_WALL_NOMINAL_THICKNESS), alias: "SourceApplicatorWallNominalThickness", vr: Exact(DS), vm: "1" },
    E { tag: Single(SOURCE_APPLICATOR_WALL_NOMINAL_TRANSMISSION), alias: "SourceApplicatorWallNominalTransmission", vr: Exact(DS), vm: "1" },
    E { tag: Single(SOURCE_APPLICATOR_STEP_SIZE), alias: "SourceApplicatorStepSize", vr: Exact(DS), vm: "1" },
    E { tag: Single(TRANSFER_TUBE_NUMBER), alias: "TransferTubeNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(TRANSFER_TUBE_LENGTH), alias: "TransferTubeLength", vr: Exact(DS), vm: "1" },
    E { tag: Single(CHANNEL_SHIELD_SEQUENCE), alias: "ChannelShieldSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CHANNEL_SHIELD_NUMBER), alias: "ChannelShieldNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(CHANNEL_SHIELD_ID), alias: "ChannelShieldID", vr: Exact(SH), vm: "1" },
    E { tag: Single(CHANNEL_SHIELD_NAME), alias: "ChannelShieldName", vr: Exact(LO), vm: "1" },
    E { tag: Single(CHANNEL_SHIELD_NOMINAL_THICKNESS), alias: "ChannelShieldNominalThickness", vr: Exact(DS), vm: "1" },
    E { tag: Single(CHANNEL_SHIELD_NOMINAL_TRANSMISSION), alias: "ChannelShieldNominalTransmission", vr: Exact(DS), vm: "1" },
    E { tag: Single(FINAL_CUMULATIVE_TIME_WEIGHT), alias: "FinalCumulativeTimeWeight", vr: Exact(DS), vm: "1" },
    E { tag: Single(BRACHY_CONTROL_POINT_SEQUENCE), alias: "BrachyControlPointSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(CONTROL_POINT_RELATIVE_POSITION), alias: "ControlPointRelativePosition", vr: Exact(DS), vm: "1" },
    E { tag: Single(CONTROL_POINT3_D_POSITION), alias: "ControlPoint3DPosition", vr: Exact(DS), vm: "3" },
    E { tag: Single(CUMULATIVE_TIME_WEIGHT), alias: "CumulativeTimeWeight", vr: Exact(DS), vm: "1" },
    E { tag: Single(REFERENCED_RT_PLAN_SEQUENCE), alias: "ReferencedRTPlanSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_BEAM_SEQUENCE), alias: "ReferencedBeamSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_BEAM_NUMBER), alias: "ReferencedBeamNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(REFERENCED_REFERENCE_IMAGE_NUMBER), alias: "ReferencedReferenceImageNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(START_CUMULATIVE_METERSET_WEIGHT), alias: "StartCumulativeMetersetWeight", vr: Exact(DS), vm: "1" },
    E { tag: Single(END_CUMULATIVE_METERSET_WEIGHT), alias: "EndCumulativeMetersetWeight", vr: Exact(DS), vm: "1" },
    E { tag: Single(REFERENCED_BRACHY_APPLICATION_SETUP_SEQUENCE), alias: "ReferencedBrachyApplicationSetupSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_BRACHY_APPLICATION_SETUP_NUMBER), alias: "ReferencedBrachyApplicationSetupNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(REFERENCED_SOURCE_NUMBER), alias: "ReferencedSourceNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(REFERENCED_FRACTION_GROUP_SEQUENCE), alias: "ReferencedFractionGroupSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_FRACTION_GROUP_NUMBER), alias: "ReferencedFractionGroupNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(REFERENCED_VERIFICATION_IMAGE_SEQUENCE), alias: "ReferencedVerificationImageSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_REFERENCE_IMAGE_SEQUENCE), alias: "ReferencedReferenceImageSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_DOSE_REFERENCE_SEQUENCE), alias: "ReferencedDoseReferenceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_DOSE_REFERENCE_NUMBER), alias: "ReferencedDoseReferenceNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(BRACHY_REFERENCED_DOSE_REFERENCE_SEQUENCE), alias: "BrachyReferencedDoseReferenceSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_STRUCTURE_SET_SEQUENCE), alias: "ReferencedStructureSetSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_PATIENT_SETUP_NUMBER), alias: "ReferencedPatientSetupNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(REFERENCED_DOSE_SEQUENCE), alias: "ReferencedDoseSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_TOLERANCE_TABLE_NUMBER), alias: "ReferencedToleranceTableNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(REFERENCED_BOLUS_SEQUENCE), alias: "ReferencedBolusSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_WEDGE_NUMBER), alias: "ReferencedWedgeNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(REFERENCED_COMPENSATOR_NUMBER), alias: "ReferencedCompensatorNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(REFERENCED_BLOCK_NUMBER), alias: "ReferencedBlockNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(REFERENCED_CONTROL_POINT_INDEX), alias: "ReferencedControlPointIndex", vr: Exact(IS), vm: "1" },
    E { tag: Single(REFERENCED_CONTROL_POINT_SEQUENCE), alias: "ReferencedControlPointSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(REFERENCED_START_CONTROL_POINT_INDEX), alias: "ReferencedStartControlPointIndex", vr: Exact(IS), vm: "1" },
    E { tag: Single(REFERENCED_STOP_CONTROL_POINT_INDEX), alias: "ReferencedStopControlPointIndex", vr: Exact(IS), vm: "1" },
    E { tag: Single(REFERENCED_RANGE_SHIFTER_NUMBER), alias: "ReferencedRangeShifterNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(REFERENCED_LATERAL_SPREADING_DEVICE_NUMBER), alias: "ReferencedLateralSpreadingDeviceNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(REFERENCED_RANGE_MODULATOR_NUMBER), alias: "ReferencedRangeModulatorNumber", vr: Exact(IS), vm: "1" },
    E { tag: Single(APPROVAL_STATUS), alias: "ApprovalStatus", vr: Exact(CS), vm: "1" },
    E { tag: Single(REVIEW_DATE), alias: "ReviewDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(REVIEW_TIME), alias: "ReviewTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(REVIEWER_NAME), alias: "ReviewerName", vr: Exact(PN), vm: "1" },
    E { tag: Single(ARBITRARY), alias: "Arbitrary", vr: Exact(LT), vm: "1" },
    E { tag: Single(TEXT_COMMENTS), alias: "TextComments", vr: Exact(LT), vm: "1" },
    E { tag: Single(RESULTS_ID), alias: "ResultsID", vr: Exact(SH), vm: "1" },
    E { tag: Single(RESULTS_ID_ISSUER), alias: "ResultsIDIssuer", vr: Exact(LO), vm: "1" },
    E { tag: Single(REFERENCED_INTERPRETATION_SEQUENCE), alias: "ReferencedInterpretationSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(INTERPRETATION_RECORDED_DATE), alias: "InterpretationRecordedDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(INTERPRETATION_RECORDED_TIME), alias: "InterpretationRecordedTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(INTERPRETATION_RECORDER), alias: "InterpretationRecorder", vr: Exact(PN), vm: "1" },
    E { tag: Single(REFERENCE_TO_RECORDED_SOUND), alias: "ReferenceToRecordedSound", vr: Exact(LO), vm: "1" },
    E { tag: Single(INTERPRETATION_TRANSCRIPTION_DATE), alias: "InterpretationTranscriptionDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(INTERPRETATION_TRANSCRIPTION_TIME), alias: "InterpretationTranscriptionTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(INTERPRETATION_TRANSCRIBER), alias: "InterpretationTranscriber", vr: Exact(PN), vm: "1" },
    E { tag: Single(INTERPRETATION_TEXT), alias: "InterpretationText", vr: Exact(ST), vm: "1" },
    E { tag: Single(INTERPRETATION_AUTHOR), alias: "InterpretationAuthor", vr: Exact(PN), vm: "1" },
    E { tag: Single(INTERPRETATION_APPROVER_SEQUENCE), alias: "InterpretationApproverSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(INTERPRETATION_APPROVAL_DATE), alias: "InterpretationApprovalDate", vr: Exact(DA), vm: "1" },
    E { tag: Single(INTERPRETATION_APPROVAL_TIME), alias: "InterpretationApprovalTime", vr: Exact(TM), vm: "1" },
    E { tag: Single(PHYSICIAN_APPROVING_INTERPRETATION), alias: "PhysicianApprovingInterpretation", vr: Exact(PN), vm: "1" },
    E { tag: Single(INTERPRETATION_DIAGNOSIS_DESCRIPTION), alias: "InterpretationDiagnosisDescription", vr: Exact(LT), vm: "1" },
    E { tag: Single(INTERPRETATION_DIAGNOSIS_CODE_SEQUENCE), alias: "InterpretationDiagnosisCodeSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(RESULTS_DISTRIBUTION_LIST_SEQUENCE), alias: "ResultsDistributionListSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DISTRIBUTION_NAME), alias: "DistributionName", vr: Exact(PN), vm: "1" },
    E { tag: Single(DISTRIBUTION_ADDRESS), alias: "DistributionAddress", vr: Exact(LO), vm: "1" },
    E { tag: Single(INTERPRETATION_ID), alias: "InterpretationID", vr: Exact(SH), vm: "1" },
    E { tag: Single(INTERPRETATION_ID_ISSUER), alias: "InterpretationIDIssuer", vr: Exact(LO), vm: "1" },
    E { tag: Single(INTERPRETATION_TYPE_ID), alias: "InterpretationTypeID", vr: Exact(CS), vm: "1" },
    E { tag: Single(INTERPRETATION_STATUS_ID), alias: "InterpretationStatusID", vr: Exact(CS), vm: "1" },
    E { tag: Single(IMPRESSIONS), alias: "Impressions", vr: Exact(ST), vm: "1" },
    E { tag: Single(RESULTS_COMMENTS), alias: "ResultsComments", vr: Exact(ST), vm: "1" },
    E { tag: Group100(CURVE_DIMENSIONS), alias: "CurveDimensions", vr: Exact(US), vm: "1" },
    E { tag: Group100(NUMBER_OF_POINTS), alias: "NumberOfPoints", vr: Exact(US), vm: "1" },
    E { tag: Group100(TYPE_OF_DATA), alias: "TypeOfData", vr: Exact(CS), vm: "1" },
    E { tag: Group100(CURVE_DESCRIPTION), alias: "CurveDescription", vr: Exact(LO), vm: "1" },
    E { tag: Group100(AXIS_UNITS), alias: "AxisUnits", vr: Exact(SH), vm: "1-n" },
    E { tag: Group100(AXIS_LABELS), alias: "AxisLabels", vr: Exact(SH), vm: "1-n" },
    E { tag: Group100(DATA_VALUE_REPRESENTATION), alias: "DataValueRepresentation", vr: Exact(US), vm: "1" },
    E { tag: Group100(MINIMUM_COORDINATE_VALUE), alias: "MinimumCoordinateValue", vr: Exact(US), vm: "1-n" },
    E { tag: Group100(MAXIMUM_COORDINATE_VALUE), alias: "MaximumCoordinateValue", vr: Exact(US), vm: "1-n" },
    E { tag: Group100(CURVE_RANGE), alias: "CurveRange", vr: Exact(SH), vm: "1-n" },
    E { tag: Group100(CURVE_DATA_DESCRIPTOR), alias: "CurveDataDescriptor", vr: Exact(US), vm: "1-n" },
    E { tag: Group100(COORDINATE_START_VALUE), alias: "CoordinateStartValue", vr: Exact(US), vm: "1-n" },
    E { tag: Group100(COORDINATE_STEP_VALUE), alias: "CoordinateStepValue", vr: Exact(US), vm: "1-n" },
    E { tag: Group100(CURVE_ACTIVATION_LAYER), alias: "CurveActivationLayer", vr: Exact(CS), vm: "1" },
    E { tag: Group100(AUDIO_TYPE), alias: "AudioType", vr: Exact(US), vm: "1" },
    E { tag: Group100(AUDIO_SAMPLE_FORMAT), alias: "AudioSampleFormat", vr: Exact(US), vm: "1" },
    E { tag: Group100(NUMBER_OF_CHANNELS), alias: "NumberOfChannels", vr: Exact(US), vm: "1" },
    E { tag: Group100(NUMBER_OF_SAMPLES), alias: "NumberOfSamples", vr: Exact(UL), vm: "1" },
    E { tag: Group100(SAMPLE_RATE), alias: "SampleRate", vr: Exact(UL), vm: "1" },
    E { tag: Group100(TOTAL_TIME), alias: "TotalTime", vr: Exact(UL), vm: "1" },
    E { tag: Group100(AUDIO_SAMPLE_DATA), alias: "AudioSampleData", vr: Ox, vm: "1" }, // OB or OW
    E { tag: Group100(AUDIO_COMMENTS), alias: "AudioComments", vr: Exact(LT), vm: "1" },
    E { tag: Group100(CURVE_LABEL), alias: "CurveLabel", vr: Exact(LO), vm: "1" },
    E { tag: Group100(CURVE_REFERENCED_OVERLAY_SEQUENCE), alias: "CurveReferencedOverlaySequence", vr: Exact(SQ), vm: "1" },
    E { tag: Group100(CURVE_REFERENCED_OVERLAY_GROUP), alias: "CurveReferencedOverlayGroup", vr: Exact(US), vm: "1" },
    E { tag: Group100(CURVE_DATA), alias: "CurveData", vr: Ox, vm: "1" }, // OB or OW
    E { tag: Group100(OVERLAY_ROWS), alias: "OverlayRows", vr: Exact(US), vm: "1" },
    E { tag: Group100(OVERLAY_COLUMNS), alias: "OverlayColumns", vr: Exact(US), vm: "1" },
    E { tag: Group100(OVERLAY_PLANES), alias: "OverlayPlanes", vr: Exact(US), vm: "1" },
    E { tag: Group100(NUMBER_OF_FRAMES_IN_OVERLAY), alias: "NumberOfFramesInOverlay", vr: Exact(IS), vm: "1" },
    E { tag: Group100(OVERLAY_DESCRIPTION), alias: "OverlayDescription", vr: Exact(LO), vm: "1" },
    E { tag: Group100(OVERLAY_TYPE), alias: "OverlayType", vr: Exact(CS), vm: "1" },
    E { tag: Group100(OVERLAY_SUBTYPE), alias: "OverlaySubtype", vr: Exact(LO), vm: "1" },
    E { tag: Group100(OVERLAY_ORIGIN), alias: "OverlayOrigin", vr: Exact(SS), vm: "2" },
    E { tag: Group100(IMAGE_FRAME_ORIGIN), alias: "ImageFrameOrigin", vr: Exact(US), vm: "1" },
    E { tag: Group100(OVERLAY_PLANE_ORIGIN), alias: "OverlayPlaneOrigin", vr: Exact(US), vm: "1" },
    E { tag: Group100(OVERLAY_BITS_ALLOCATED), alias: "OverlayBitsAllocated", vr: Exact(US), vm: "1" },
    E { tag: Group100(OVERLAY_BIT_POSITION), alias: "OverlayBitPosition", vr: Exact(US), vm: "1" },
    E { tag: Group100(OVERLAY_FORMAT), alias: "OverlayFormat", vr: Exact(CS), vm: "1" },
    E { tag: Group100(OVERLAY_LOCATION), alias: "OverlayLocation", vr: Exact(US), vm: "1" },
    E { tag: Group100(OVERLAY_CODE_LABEL), alias: "OverlayCodeLabel", vr: Exact(CS), vm: "1-n" },
    E { tag: Group100(OVERLAY_NUMBER_OF_TABLES), alias: "OverlayNumberOfTables", vr: Exact(US), vm: "1" },
    E { tag: Group100(OVERLAY_CODE_TABLE_LOCATION), alias: "OverlayCodeTableLocation", vr: Exact(AT), vm: "1-n" },
    E { tag: Group100(OVERLAY_BITS_FOR_CODE_WORD), alias: "OverlayBitsForCodeWord", vr: Exact(US), vm: "1" },
    E { tag: Group100(OVERLAY_ACTIVATION_LAYER), alias: "OverlayActivationLayer", vr: Exact(CS), vm: "1" },
    E { tag: Group100(OVERLAY_DESCRIPTOR_GRAY), alias: "OverlayDescriptorGray", vr: Exact(US), vm: "1" },
    E { tag: Group100(OVERLAY_DESCRIPTOR_RED), alias: "OverlayDescriptorRed", vr: Exact(US), vm: "1" },
    E { tag: Group100(OVERLAY_DESCRIPTOR_GREEN), alias: "OverlayDescriptorGreen", vr: Exact(US), vm: "1" },
    E { tag: Group100(OVERLAY_DESCRIPTOR_BLUE), alias: "OverlayDescriptorBlue", vr: Exact(US), vm: "1" },
    E { tag: Group100(OVERLAYS_GRAY), alias: "OverlaysGray", vr: Exact(US), vm: "1-n" },
    E { tag: Group100(OVERLAYS_RED), alias: "OverlaysRed", vr: Exact(US), vm: "1-n" },
    E { tag: Group100(OVERLAYS_GREEN), alias: "OverlaysGreen", vr: Exact(US), vm: "1-n" },
    E { tag: Group100(OVERLAYS_BLUE), alias: "OverlaysBlue", vr: Exact(US), vm: "1-n" },
    E { tag: Group100(ROI_AREA), alias: "ROIArea", vr: Exact(IS), vm: "1" },
    E { tag: Group100(ROI_MEAN), alias: "ROIMean", vr: Exact(DS), vm: "1" },
    E { tag: Group100(ROI_STANDARD_DEVIATION), alias: "ROIStandardDeviation", vr: Exact(DS), vm: "1" },
    E { tag: Group100(OVERLAY_LABEL), alias: "OverlayLabel", vr: Exact(LO), vm: "1" },
    E { tag: Group100(OVERLAY_DATA), alias: "OverlayData", vr: Ox, vm: "1" }, // OB or OW
    E { tag: Group100(OVERLAY_COMMENTS), alias: "OverlayComments", vr: Exact(LT), vm: "1" },
    E { tag: Group100(VARIABLE_PIXEL_DATA), alias: "VariablePixelData", vr: Ox, vm: "1" }, // OB or OW
    E { tag: Group100(VARIABLE_NEXT_DATA_GROUP), alias: "VariableNextDataGroup", vr: Exact(US), vm: "1" },
    E { tag: Group100(VARIABLE_COEFFICIENTS_SDVN), alias: "VariableCoefficientsSDVN", vr: Exact(OW), vm: "1" },
    E { tag: Group100(VARIABLE_COEFFICIENTS_SDHN), alias: "VariableCoefficientsSDHN", vr: Exact(OW), vm: "1" },
    E { tag: Group100(VARIABLE_COEFFICIENTS_SDDN), alias: "VariableCoefficientsSDDN", vr: Exact(OW), vm: "1" },
    E { tag: Single(EXTENDED_OFFSET_TABLE), alias: "ExtendedOffsetTable", vr: Exact(OV), vm: "1" },
    E { tag: Single(EXTENDED_OFFSET_TABLE_LENGTHS), alias: "ExtendedOffsetTableLengths", vr: Exact(OV), vm: "1" },
    E { tag: Single(ENCAPSULATED_PIXEL_DATA_VALUE_TOTAL_LENGTH), alias: "EncapsulatedPixelDataValueTotalLength", vr: Exact(UV), vm: "1" },
    E { tag: Single(FLOAT_PIXEL_DATA), alias: "FloatPixelData", vr: Exact(OF), vm: "1" },
    E { tag: Single(DOUBLE_FLOAT_PIXEL_DATA), alias: "DoubleFloatPixelData", vr: Exact(OD), vm: "1" },
    E { tag: Single(PIXEL_DATA), alias: "PixelData", vr: Px, vm: "1" }, // OB or OW
    E { tag: Single(COEFFICIENTS_SDVN), alias: "CoefficientsSDVN", vr: Exact(OW), vm: "1" },
    E { tag: Single(COEFFICIENTS_SDHN), alias: "CoefficientsSDHN", vr: Exact(OW), vm: "1" },
    E { tag: Single(COEFFICIENTS_SDDN), alias: "CoefficientsSDDN", vr: Exact(OW), vm: "1" },
    E { tag: Single(DIGITAL_SIGNATURES_SEQUENCE), alias: "DigitalSignaturesSequence", vr: Exact(SQ), vm: "1" },
    E { tag: Single(DATA_SET_TRAILING_PADDING), alias: "DataSetTrailingPadding", vr: Exact(OB), vm: "1" },
];
